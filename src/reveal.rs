use crate::constants::IN_VIEW_STATE_ATTR;
use crate::dom;
use site_core::{
    stagger, Animation, IntersectionEntry, ObserverCommand, RevealConfig, VisibilityObserver,
    VisibilityOptions, DEFAULT_STAGGER_DELAY_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// One element under an `IntersectionObserver`. `on_change` runs with the
/// new visibility after every entry. The observer is disconnected on drop.
pub struct ObservedElement {
    observer: web::IntersectionObserver,
    state: Rc<RefCell<VisibilityObserver>>,
    _callback: EntryCallback,
}

impl ObservedElement {
    pub fn observe(
        element: &web::Element,
        options: VisibilityOptions,
        on_change: impl Fn(&web::Element, bool) + 'static,
    ) -> anyhow::Result<Self> {
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let state = Rc::new(RefCell::new(VisibilityObserver::new(options)));
        let state_cb = state.clone();
        let target = element.clone();
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let command = state_cb.borrow_mut().on_entry(IntersectionEntry {
                        is_intersecting: entry.is_intersecting(),
                    });
                    let visible = state_cb.borrow().is_visible();
                    on_change(&target, visible);
                    if command == ObserverCommand::Unobserve {
                        observer.unobserve(&target);
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if state.borrow_mut().mount(true) {
            observer.observe(element);
        }
        Ok(Self {
            observer,
            state,
            _callback: callback,
        })
    }
}

impl Drop for ObservedElement {
    fn drop(&mut self) {
        self.state.borrow_mut().unmount();
        self.observer.disconnect();
    }
}

/// Scroll-reveal section: swaps hidden/active classes the first time the
/// element scrolls into view.
pub struct RevealSection {
    _observed: ObservedElement,
}

impl RevealSection {
    pub fn mount(element: &web::Element) -> anyhow::Result<Self> {
        let (mut config, errors) = RevealConfig::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("reveal", &errors);
        config.class_name = base_class(element);
        Self::mount_with(element, config)
    }

    pub fn mount_with(element: &web::Element, config: RevealConfig) -> anyhow::Result<Self> {
        render(element, &config, false);
        let options = config.visibility_options();
        let observed = ObservedElement::observe(element, options, move |el, visible| {
            render(el, &config, visible)
        })?;
        Ok(Self {
            _observed: observed,
        })
    }
}

/// Class list the element was authored with, remembered across remounts.
fn base_class(element: &web::Element) -> String {
    const BASE_CLASS_ATTR: &str = "data-reveal-base-class";
    if let Some(base) = element.get_attribute(BASE_CLASS_ATTR) {
        return base;
    }
    let base = element.class_name();
    _ = element.set_attribute(BASE_CLASS_ATTR, &base);
    base
}

fn render(element: &web::Element, config: &RevealConfig, visible: bool) {
    element.set_class_name(&config.class_list(visible));
    dom::set_style(
        element,
        "transition-duration",
        &format!("{}ms", config.duration_ms),
    );
    dom::set_style(element, "transition-delay", &format!("{}ms", config.delay_ms));
}

/// Reveal every child of a container, each delayed a little more than the last.
pub fn mount_staggered(container: &web::Element) -> Vec<RevealSection> {
    let mut delay = DEFAULT_STAGGER_DELAY_MS;
    let mut errors = Vec::new();
    site_core::attrs::read_number(
        &dom::attr_reader(container),
        "data-stagger",
        &mut delay,
        &mut errors,
    );
    let animation = match container.get_attribute("data-reveal") {
        Some(name) if !name.trim().is_empty() => name.parse().unwrap_or_else(|e| {
            log::warn!("[reveal] {}, using default", e);
            Animation::default()
        }),
        _ => Animation::default(),
    };
    dom::log_config_errors("stagger", &errors);

    let children = dom::children(container);
    stagger(children.len(), delay, animation)
        .into_iter()
        .zip(children)
        .filter_map(|(mut config, child)| {
            config.class_name = base_class(&child);
            RevealSection::mount_with(&child, config)
                .map_err(|e| log::warn!("[reveal] stagger child: {:?}", e))
                .ok()
        })
        .collect()
}

/// Continuous tracking: mirrors visibility into a `data-visible` attribute
/// for stylesheets to key off. `data-in-view="once"` makes it one-shot.
pub struct InView {
    _observed: ObservedElement,
}

impl InView {
    pub fn mount(element: &web::Element) -> anyhow::Result<Self> {
        let mut options = VisibilityOptions {
            trigger_once: element.get_attribute("data-in-view").as_deref() == Some("once"),
            ..VisibilityOptions::default()
        };
        let mut errors = Vec::new();
        site_core::attrs::read_number(
            &dom::attr_reader(element),
            "data-in-view-threshold",
            &mut options.threshold,
            &mut errors,
        );
        if let Some(margin) = element.get_attribute("data-in-view-margin") {
            options.root_margin = margin;
        }
        dom::log_config_errors("in-view", &errors);
        _ = element.set_attribute(IN_VIEW_STATE_ATTR, "false");

        let observed = ObservedElement::observe(element, options, |el, visible| {
            _ = el.set_attribute(IN_VIEW_STATE_ATTR, if visible { "true" } else { "false" });
        })?;
        Ok(Self {
            _observed: observed,
        })
    }
}
