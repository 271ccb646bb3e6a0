use site_core::{compact_viewport_query, ConfigError, Environment, Measure, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        Self::with_passive(target, event, false, handler)
    }

    /// Listener that promises never to call `preventDefault`.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        Self::with_passive(target, event, true, handler)
    }

    /// Mouse listener; events of other types are dropped.
    pub fn mouse(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(&web::MouseEvent) + 'static,
    ) -> Self {
        Self::with_passive(target, event, true, move |ev: web::Event| {
            if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
                handler(mouse);
            }
        })
    }

    fn with_passive(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[dom] add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Repeating `setInterval` timer, cleared when dropped.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Resolve after `delay` using the window timer.
pub async fn sleep(delay: std::time::Duration) {
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Viewport queries answered by the live window.
#[derive(Clone)]
pub struct BrowserEnv {
    window: web::Window,
}

impl BrowserEnv {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Environment for BrowserEnv {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn is_compact_viewport(&self) -> bool {
        self.window
            .match_media(&compact_viewport_query())
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

/// Layout box of a DOM element.
pub struct Layout<'a>(pub &'a web::Element);

impl Measure for Layout<'_> {
    fn bounding_rect(&self) -> Rect {
        rect_of(self.0)
    }
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> glam::DVec2 {
    glam::DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Attribute lookup closure for the core config readers.
pub fn attr_reader(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name: &str| el.get_attribute(name)
}

pub fn log_config_errors(component: &str, errors: &[ConfigError]) {
    for e in errors {
        log::warn!("[{}] {}, using default", component, e);
    }
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn children(el: &web::Element) -> Vec<web::Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}
