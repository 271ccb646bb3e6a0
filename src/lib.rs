#![cfg(target_arch = "wasm32")]
use site_core::{AuthState, FooterModel, SeoMeta, Untranslated};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod footer;
mod frame;
mod gate;
mod head;
mod media;
mod overlay;
mod reveal;

use constants::*;
use events::{pointer, scroll};

/// Everything mounted on the current page. Dropping it releases every
/// listener, observer and animation frame the components registered.
#[derive(Default)]
struct Page {
    reveals: Vec<reveal::RevealSection>,
    in_view: Vec<reveal::InView>,
    parallax: Vec<scroll::ParallaxSection>,
    parallax_backgrounds: Vec<scroll::ParallaxBackground>,
    mouse_parallax: Vec<pointer::MouseParallaxLayer>,
    magnetic: Vec<pointer::MagneticButton>,
    tilt: Vec<pointer::TiltCard>,
    newsletters: Vec<footer::Newsletter>,
    cursor: Option<cursor::CustomCursor>,
    gate: Option<gate::ProtectedArea>,
}

impl Page {
    fn component_count(&self) -> usize {
        self.reveals.len()
            + self.in_view.len()
            + self.parallax.len()
            + self.parallax_backgrounds.len()
            + self.mouse_parallax.len()
            + self.magnetic.len()
            + self.tilt.len()
            + self.newsletters.len()
            + usize::from(self.cursor.is_some())
            + usize::from(self.gate.is_some())
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn mount_page(document: &web::Document, env: &dom::BrowserEnv) -> Page {
    let mut page = Page::default();

    // Footer markup first so its form and in-view hooks are discovered below.
    for el in dom::query_all(document, FOOTER_SELECTOR) {
        if let Err(e) = footer::render(document, &el, &FooterModel::build(&Untranslated)) {
            log::warn!("[footer] render failed: {:?}", e);
        }
    }

    for el in dom::query_all(document, REVEAL_SELECTOR) {
        match reveal::RevealSection::mount(&el) {
            Ok(r) => page.reveals.push(r),
            Err(e) => log::warn!("[reveal] {:?}", e),
        }
    }
    for el in dom::query_all(document, STAGGER_SELECTOR) {
        page.reveals.extend(reveal::mount_staggered(&el));
    }
    for el in dom::query_all(document, IN_VIEW_SELECTOR) {
        match reveal::InView::mount(&el) {
            Ok(v) => page.in_view.push(v),
            Err(e) => log::warn!("[in-view] {:?}", e),
        }
    }
    page.parallax = dom::query_all(document, PARALLAX_SELECTOR)
        .iter()
        .filter_map(|el| scroll::ParallaxSection::mount(el, env))
        .collect();
    page.parallax_backgrounds = dom::query_all(document, PARALLAX_BG_SELECTOR)
        .iter()
        .filter_map(|el| scroll::ParallaxBackground::mount(el, env))
        .collect();
    page.mouse_parallax = dom::query_all(document, MOUSE_PARALLAX_SELECTOR)
        .iter()
        .filter_map(pointer::MouseParallaxLayer::mount)
        .collect();
    page.magnetic = dom::query_all(document, MAGNETIC_SELECTOR)
        .iter()
        .map(pointer::MagneticButton::mount)
        .collect();
    page.tilt = dom::query_all(document, TILT_SELECTOR)
        .iter()
        .filter_map(|el| pointer::TiltCard::mount(el, env))
        .collect();
    page.newsletters = dom::query_all(document, NEWSLETTER_FORM_SELECTOR)
        .iter()
        .filter_map(footer::Newsletter::mount)
        .collect();
    for el in dom::query_all(document, BACKGROUND_VIDEO_SELECTOR) {
        media::autoplay(&el);
    }

    let cursor_enabled = document
        .body()
        .map(|b| b.has_attribute(CUSTOM_CURSOR_ATTR))
        .unwrap_or(false);
    if cursor_enabled {
        page.cursor = cursor::CustomCursor::mount(document, env).unwrap_or_else(|e| {
            log::warn!("[cursor] {:?}", e);
            None
        });
    }
    page.gate = gate::ProtectedArea::mount(document).unwrap_or_else(|e| {
        log::warn!("[auth] {:?}", e);
        None
    });

    if let Some(meta) = head::meta_from_body(document) {
        head::apply(document, &meta);
    }
    page
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let env = dom::BrowserEnv::new(window);
    let page = mount_page(&document, &env);
    log::info!("mounted {} components", page.component_count());
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Release everything mounted on the current page.
#[wasm_bindgen]
pub fn unmount_all() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if let Some(page) = page {
        log::info!("unmounting {} components", page.component_count());
    }
}

/// Re-scan the document after the host swapped page content.
#[wasm_bindgen]
pub fn remount() {
    unmount_all();
    if let Err(e) = init() {
        log::error!("remount error: {:?}", e);
    }
}

/// Feed the host's auth context into the admin gate.
#[wasm_bindgen]
pub fn set_auth_state(is_loading: bool, is_authenticated: bool) {
    PAGE.with(|p| {
        if let Some(gate) = p.borrow_mut().as_mut().and_then(|page| page.gate.as_mut()) {
            gate.update(AuthState {
                is_loading,
                is_authenticated,
            });
        }
    });
}

/// Set the page's head metadata. `overrides` is an optional object with
/// camelCase fields such as `ogTitle`, `twitterImage` or `structuredData`.
#[wasm_bindgen]
pub fn set_page_meta(title: &str, description: &str, overrides: JsValue) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let meta = SeoMeta::for_page(title, description)
        .with_overrides(&head::overrides_from_js(&overrides));
    head::apply(&document, &meta);
}
