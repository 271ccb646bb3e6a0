//! Document head metadata for a page.
//!
//! [`SeoMeta::head_tags`] always yields the same ten tags in the same order,
//! followed by whichever optional tags were configured.

use crate::constants::{DEFAULT_OG_IMAGE, DEFAULT_ROBOTS, SITE_NAME};
use serde_json::Value;

/// Which attribute carries a meta tag's key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    pub fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta {
        key: MetaKey,
        name: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
    JsonLd(String),
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Name,
            name,
            content: content.into(),
        }
    }

    fn property(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Property,
            name,
            content: content.into(),
        }
    }

    /// Content of a meta tag with the given key name, if this is one.
    pub fn meta_content(&self, wanted: &str) -> Option<&str> {
        match self {
            HeadTag::Meta { name, content, .. } if *name == wanted => Some(content),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub robots: Option<String>,
    pub canonical_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub structured_data: Option<Value>,
}

impl SeoMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Metadata for a public site page: indexable, with large image previews.
    pub fn for_page(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).robots(DEFAULT_ROBOTS)
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn og_title(mut self, v: impl Into<String>) -> Self {
        self.og_title = Some(v.into());
        self
    }

    pub fn og_description(mut self, v: impl Into<String>) -> Self {
        self.og_description = Some(v.into());
        self
    }

    pub fn og_image(mut self, v: impl Into<String>) -> Self {
        self.og_image = Some(v.into());
        self
    }

    pub fn og_url(mut self, v: impl Into<String>) -> Self {
        self.og_url = Some(v.into());
        self
    }

    pub fn twitter_title(mut self, v: impl Into<String>) -> Self {
        self.twitter_title = Some(v.into());
        self
    }

    pub fn twitter_description(mut self, v: impl Into<String>) -> Self {
        self.twitter_description = Some(v.into());
        self
    }

    pub fn twitter_image(mut self, v: impl Into<String>) -> Self {
        self.twitter_image = Some(v.into());
        self
    }

    pub fn structured_data(mut self, v: Value) -> Self {
        self.structured_data = Some(v);
        self
    }

    pub fn full_title(&self) -> String {
        format!("{} - {}", self.title, SITE_NAME)
    }

    pub fn head_tags(&self) -> Vec<HeadTag> {
        let full_title = self.full_title();
        let og_title = non_empty(&self.og_title).unwrap_or(&full_title).to_string();
        let og_description = non_empty(&self.og_description)
            .unwrap_or(&self.description)
            .to_string();
        let og_image = non_empty(&self.og_image)
            .unwrap_or(DEFAULT_OG_IMAGE)
            .to_string();
        let twitter_title = non_empty(&self.twitter_title).unwrap_or(&og_title).to_string();
        let twitter_description = non_empty(&self.twitter_description)
            .unwrap_or(&og_description)
            .to_string();
        let twitter_image = non_empty(&self.twitter_image).unwrap_or(&og_image).to_string();

        let mut tags = vec![
            HeadTag::Title(full_title),
            HeadTag::name("description", self.description.clone()),
            HeadTag::property("og:title", og_title),
            HeadTag::property("og:type", "website"),
            HeadTag::property("og:description", og_description),
            HeadTag::property("og:image", og_image),
            HeadTag::name("twitter:card", "summary_large_image"),
            HeadTag::name("twitter:title", twitter_title),
            HeadTag::name("twitter:description", twitter_description),
            HeadTag::name("twitter:image", twitter_image),
        ];

        if let Some(robots) = non_empty(&self.robots) {
            tags.push(HeadTag::name("robots", robots));
        }
        if !self.keywords.is_empty() {
            tags.push(HeadTag::name("keywords", self.keywords.join(", ")));
        }
        if let Some(url) = non_empty(&self.canonical_url).or(non_empty(&self.og_url)) {
            tags.push(HeadTag::Link {
                rel: "canonical",
                href: url.to_string(),
            });
        }
        if let Some(url) = non_empty(&self.og_url) {
            tags.push(HeadTag::property("og:url", url));
        }
        if let Some(data) = &self.structured_data {
            tags.push(HeadTag::JsonLd(data.to_string()));
        }
        tags
    }
}

// Empty strings count as absent, matching how the fields are filled from markup.
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl SeoMeta {
    /// Fill optional fields from a JSON object with camelCase keys
    /// (`ogTitle`, `twitterImage`, `keywords`, `structuredData`, ...).
    /// Unknown keys and values of the wrong type are ignored.
    pub fn with_overrides(mut self, overrides: &Value) -> Self {
        let text = |key: &str| {
            overrides
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        if let Some(words) = overrides.get("keywords").and_then(Value::as_array) {
            self.keywords = words
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }
        self.robots = text("robots").or(self.robots);
        self.canonical_url = text("canonicalUrl").or(self.canonical_url);
        self.og_title = text("ogTitle").or(self.og_title);
        self.og_description = text("ogDescription").or(self.og_description);
        self.og_image = text("ogImage").or(self.og_image);
        self.og_url = text("ogUrl").or(self.og_url);
        self.twitter_title = text("twitterTitle").or(self.twitter_title);
        self.twitter_description = text("twitterDescription").or(self.twitter_description);
        self.twitter_image = text("twitterImage").or(self.twitter_image);
        if let Some(data) = overrides.get("structuredData").filter(|v| !v.is_null()) {
            self.structured_data = Some(data.clone());
        }
        self
    }
}
