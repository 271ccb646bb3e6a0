//! Text lookup. Translation itself is the host's concern; the site only asks
//! for a key with an English fallback.

pub trait Translate {
    fn t(&self, key: &str, fallback: &str) -> String;
}

impl<F: Fn(&str, &str) -> String> Translate for F {
    fn t(&self, key: &str, fallback: &str) -> String {
        self(key, fallback)
    }
}

/// Always answers with the fallback text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn t(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}
