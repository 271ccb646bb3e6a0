use crate::constants::{PROTECTED_SELECTOR, REDIRECT_ATTR};
use crate::dom;
use crate::overlay::WaitingIndicator;
use site_core::{AuthGate, AuthState, GateView, Navigator, DEFAULT_LOGIN_PATH};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Client-side navigation through the History API. Routers listening for
/// `popstate` pick the new path up once the current call returns.
pub struct HistoryNavigator;

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str) {
        let Some(window) = web::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::warn!("[auth] navigation to {} failed: {:?}", path, e);
            return;
        }
        // Notify after the current call stack unwinds; listeners may remount.
        spawn_local(async move {
            if let Ok(ev) = web::Event::new("popstate") {
                _ = window.dispatch_event(&ev);
            }
        });
    }
}

/// Admin-only content. Hidden until the host reports an authenticated user.
pub struct ProtectedArea {
    gate: AuthGate,
    content: Vec<web::Element>,
    waiting: WaitingIndicator,
}

impl ProtectedArea {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let content = dom::query_all(document, PROTECTED_SELECTOR);
        let Some(first) = content.first() else {
            return Ok(None);
        };
        let redirect_to = first
            .get_attribute(REDIRECT_ATTR)
            .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        let mut area = Self {
            gate: AuthGate::new(redirect_to),
            content,
            waiting: WaitingIndicator::attach(document)?,
        };
        // The auth context has not reported yet.
        area.update(AuthState::LOADING);
        Ok(Some(area))
    }

    pub fn update(&mut self, state: AuthState) -> GateView {
        let view = self.gate.sync(state, &mut HistoryNavigator);
        match view {
            GateView::Waiting => self.waiting.show(),
            GateView::Hidden | GateView::Protected => self.waiting.hide(),
        }
        let reveal = view == GateView::Protected;
        for el in &self.content {
            if reveal {
                _ = el.remove_attribute("hidden");
            } else {
                _ = el.set_attribute("hidden", "");
            }
        }
        view
    }
}
