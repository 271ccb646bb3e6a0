use crate::constants::SEO_MARKER_ATTR;
use crate::dom;
use site_core::{HeadTag, SeoMeta};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Write `meta` into `document.head`.
///
/// Tags already present under the same key are updated in place. Tags this
/// module wrote for a previous page that the new page does not set are removed.
pub fn apply(document: &web::Document, meta: &SeoMeta) {
    let Some(head) = document.head() else {
        log::warn!("[seo] document has no head");
        return;
    };
    let mut touched: Vec<web::Element> = Vec::new();
    for tag in meta.head_tags() {
        match apply_tag(document, &head, &tag) {
            Ok(Some(el)) => touched.push(el),
            Ok(None) => {}
            Err(e) => log::warn!("[seo] could not write {:?}: {:?}", tag, e),
        }
    }
    for stale in dom::query_all(document, &format!("head [{}]", SEO_MARKER_ATTR)) {
        let node: &web::Node = &stale;
        if !touched.iter().any(|t| t.is_same_node(Some(node))) {
            stale.remove();
        }
    }
    log::debug!("[seo] applied head for {}", meta.full_title());
}

fn apply_tag(
    document: &web::Document,
    head: &web::HtmlHeadElement,
    tag: &HeadTag,
) -> Result<Option<web::Element>, JsValue> {
    let el = match tag {
        HeadTag::Title(title) => {
            document.set_title(title);
            return Ok(None);
        }
        HeadTag::Meta { key, name, content } => {
            let el = upsert(
                document,
                head,
                "meta",
                &format!("meta[{}=\"{}\"]", key.attribute(), name),
                &[(key.attribute(), *name)],
            )?;
            el.set_attribute("content", content)?;
            el
        }
        HeadTag::Link { rel, href } => {
            let el = upsert(
                document,
                head,
                "link",
                &format!("link[rel=\"{}\"]", rel),
                &[("rel", *rel)],
            )?;
            el.set_attribute("href", href)?;
            el
        }
        HeadTag::JsonLd(json) => {
            let el = upsert(
                document,
                head,
                "script",
                "script[type=\"application/ld+json\"]",
                &[("type", "application/ld+json")],
            )?;
            el.set_text_content(Some(json));
            el
        }
    };
    el.set_attribute(SEO_MARKER_ATTR, "")?;
    Ok(Some(el))
}

fn upsert(
    document: &web::Document,
    head: &web::HtmlHeadElement,
    tag_name: &str,
    selector: &str,
    attributes: &[(&str, &str)],
) -> Result<web::Element, JsValue> {
    if let Some(existing) = head.query_selector(selector)? {
        return Ok(existing);
    }
    let el = document.create_element(tag_name)?;
    for (name, value) in attributes {
        el.set_attribute(name, value)?;
    }
    head.append_child(&el)?;
    Ok(el)
}

/// Parse a JS object of optional SEO fields into its JSON form.
pub fn overrides_from_js(value: &JsValue) -> serde_json::Value {
    if value.is_undefined() || value.is_null() {
        return serde_json::Value::Null;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_else(|| {
            log::warn!("[seo] overrides are not JSON-serializable, ignoring");
            serde_json::Value::Null
        })
}

/// Metadata declared on `<body data-seo-title data-seo-description>`.
pub fn meta_from_body(document: &web::Document) -> Option<SeoMeta> {
    let body = document.body()?;
    let title = body.get_attribute(crate::constants::SEO_TITLE_ATTR)?;
    let description = body
        .get_attribute(crate::constants::SEO_DESCRIPTION_ATTR)
        .unwrap_or_default();
    Some(SeoMeta::for_page(title, description))
}
