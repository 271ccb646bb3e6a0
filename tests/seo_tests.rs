// Host-side tests for page head metadata.

use serde_json::json;
use site_core::*;

fn content<'a>(tags: &'a [HeadTag], name: &str) -> Option<&'a str> {
    tags.iter().find_map(|t| t.meta_content(name))
}

#[test]
fn title_and_description_only() {
    let tags = SeoMeta::new("Products", "X").head_tags();
    assert_eq!(tags.len(), 10);
    assert_eq!(tags[0], HeadTag::Title("Products - Sakthi Sai Biotech".into()));
    assert_eq!(content(&tags, "description"), Some("X"));
    assert_eq!(content(&tags, "og:title"), Some("Products - Sakthi Sai Biotech"));
    assert_eq!(content(&tags, "og:description"), Some("X"));
    assert_eq!(content(&tags, "twitter:title"), Some("Products - Sakthi Sai Biotech"));
    assert_eq!(content(&tags, "twitter:description"), Some("X"));
    assert_eq!(content(&tags, "og:type"), Some("website"));
    assert_eq!(content(&tags, "twitter:card"), Some("summary_large_image"));
    assert_eq!(content(&tags, "og:image"), Some(DEFAULT_OG_IMAGE));
    assert_eq!(content(&tags, "twitter:image"), Some(DEFAULT_OG_IMAGE));
}

#[test]
fn fixed_tag_order() {
    let names: Vec<String> = SeoMeta::new("A", "B")
        .head_tags()
        .iter()
        .map(|t| match t {
            HeadTag::Title(_) => "title".to_string(),
            HeadTag::Meta { name, .. } => name.to_string(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        names,
        [
            "title",
            "description",
            "og:title",
            "og:type",
            "og:description",
            "og:image",
            "twitter:card",
            "twitter:title",
            "twitter:description",
            "twitter:image"
        ]
    );
}

#[test]
fn twitter_falls_back_to_open_graph_overrides() {
    let tags = SeoMeta::new("About", "Who we are")
        .og_title("Our story")
        .og_description("Since 1999")
        .og_image("https://cdn.example/og.png")
        .head_tags();
    assert_eq!(content(&tags, "twitter:title"), Some("Our story"));
    assert_eq!(content(&tags, "twitter:description"), Some("Since 1999"));
    assert_eq!(content(&tags, "twitter:image"), Some("https://cdn.example/og.png"));
    // The description meta always carries the page description.
    assert_eq!(content(&tags, "description"), Some("Who we are"));
}

#[test]
fn explicit_twitter_fields_win() {
    let tags = SeoMeta::new("About", "d")
        .og_title("og")
        .twitter_title("tw")
        .twitter_description("twd")
        .twitter_image("tw.png")
        .head_tags();
    assert_eq!(content(&tags, "og:title"), Some("og"));
    assert_eq!(content(&tags, "twitter:title"), Some("tw"));
    assert_eq!(content(&tags, "twitter:description"), Some("twd"));
    assert_eq!(content(&tags, "twitter:image"), Some("tw.png"));
}

#[test]
fn empty_override_counts_as_absent() {
    let tags = SeoMeta::new("Contact", "Reach us").og_title("").head_tags();
    assert_eq!(content(&tags, "og:title"), Some("Contact - Sakthi Sai Biotech"));
}

#[test]
fn optional_tags_follow_the_fixed_set() {
    let tags = SeoMeta::new("Exports", "Markets")
        .robots(DEFAULT_ROBOTS)
        .keywords(["bio-fertilizer", "export"])
        .og_url("https://sakthisaibiotech.com/exports")
        .structured_data(json!({"@type": "Organization"}))
        .head_tags();
    assert_eq!(tags.len(), 15);
    assert_eq!(content(&tags, "robots"), Some(DEFAULT_ROBOTS));
    assert_eq!(content(&tags, "keywords"), Some("bio-fertilizer, export"));
    assert!(tags.contains(&HeadTag::Link {
        rel: "canonical",
        href: "https://sakthisaibiotech.com/exports".into()
    }));
    assert_eq!(content(&tags, "og:url"), Some("https://sakthisaibiotech.com/exports"));
    assert_eq!(
        tags.last(),
        Some(&HeadTag::JsonLd(r#"{"@type":"Organization"}"#.into()))
    );
}

#[test]
fn canonical_prefers_explicit_url() {
    let tags = SeoMeta::new("T", "D")
        .canonical_url("https://a.example/")
        .og_url("https://b.example/")
        .head_tags();
    let canonical: Vec<_> = tags
        .iter()
        .filter_map(|t| match t {
            HeadTag::Link { href, .. } => Some(href.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(canonical, ["https://a.example/"]);
}

#[test]
fn overrides_from_json_object() {
    let meta = SeoMeta::new("Blog", "News").with_overrides(&json!({
        "ogTitle": "Latest",
        "twitterImage": "t.png",
        "keywords": ["a", 3, "b"],
        "structuredData": {"@type": "Blog"},
        "unknown": true,
        "ogImage": 42
    }));
    assert_eq!(meta.og_title.as_deref(), Some("Latest"));
    assert_eq!(meta.twitter_image.as_deref(), Some("t.png"));
    assert_eq!(meta.keywords, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(meta.og_image, None);
    assert!(meta.structured_data.is_some());
}

#[test]
fn null_overrides_change_nothing() {
    let base = SeoMeta::new("A", "B");
    assert_eq!(base.clone().with_overrides(&serde_json::Value::Null), base);
}

#[test]
fn page_meta_is_indexable_by_default() {
    let tags = SeoMeta::for_page("Products", "X").head_tags();
    assert_eq!(tags.len(), 11);
    assert_eq!(content(&tags, "robots"), Some(DEFAULT_ROBOTS));
}

#[test]
fn page_robots_can_be_overridden() {
    let tags = SeoMeta::for_page("Drafts", "X")
        .with_overrides(&json!({ "robots": "noindex, nofollow" }))
        .head_tags();
    assert_eq!(content(&tags, "robots"), Some("noindex, nofollow"));
    assert_eq!(tags.iter().filter(|t| t.meta_content("robots").is_some()).count(), 1);
}
