use crate::constants::{
    PARALLAX_BG_SCALE, PARALLAX_LAYER_SELECTOR, PARALLAX_OVERLAY_SELECTOR, PARALLAX_TRANSITION,
};
use crate::dom::{self, BrowserEnv, Layout, Listener};
use site_core::{ParallaxBackgroundConfig, ParallaxConfig, ScrollOffsetTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-linked offset applied to a section's content wrapper.
///
/// The outer element is measured and the first child is moved, so the
/// transform never feeds back into the measurement.
pub struct ParallaxSection {
    _scroll: Listener,
}

impl ParallaxSection {
    pub fn mount(element: &web::Element, env: &BrowserEnv) -> Option<Self> {
        let Some(content) = element.first_element_child() else {
            log::debug!("[parallax] section has no content wrapper, skipping");
            return None;
        };
        let (config, errors) = ParallaxConfig::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("parallax", &errors);
        dom::set_style(&content, "transition", PARALLAX_TRANSITION);
        dom::set_style(&content, "will-change", "transform");

        let tracker = Rc::new(RefCell::new(ScrollOffsetTracker::new(config.speed)));
        let outer = element.clone();
        let env = env.clone();
        let update = move || {
            let offset = tracker.borrow_mut().update(&env, Some(&Layout(&outer)));
            dom::set_style(&content, "transform", &config.direction.transform(offset));
        };
        // First paint must already be offset.
        update();
        let window = web::window()?;
        Some(Self {
            _scroll: Listener::passive(&window, "scroll", move |_| update()),
        })
    }
}

/// Full-bleed background layer drifting behind the section content, with a
/// dimming overlay on top.
pub struct ParallaxBackground {
    _scroll: Listener,
}

impl ParallaxBackground {
    pub fn mount(element: &web::Element, env: &BrowserEnv) -> Option<Self> {
        let Ok(Some(layer)) = element.query_selector(PARALLAX_LAYER_SELECTOR) else {
            log::debug!("[parallax-bg] no background layer, skipping");
            return None;
        };
        let (config, errors) = ParallaxBackgroundConfig::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("parallax-bg", &errors);

        if let Ok(Some(overlay)) = element.query_selector(PARALLAX_OVERLAY_SELECTOR) {
            dom::set_style(&overlay, "opacity", &config.overlay_opacity.to_string());
        }
        dom::set_style(&layer, "transition", PARALLAX_TRANSITION);
        dom::set_style(&layer, "will-change", "transform");
        dom::set_style(&layer, "scale", PARALLAX_BG_SCALE);

        let tracker = Rc::new(RefCell::new(ScrollOffsetTracker::new(config.speed)));
        let outer = element.clone();
        let env = env.clone();
        let update = move || {
            let offset = tracker.borrow_mut().update(&env, Some(&Layout(&outer)));
            dom::set_style(&layer, "transform", &config.background_transform(offset));
        };
        update();
        let window = web::window()?;
        Some(Self {
            _scroll: Listener::passive(&window, "scroll", move |_| update()),
        })
    }
}
