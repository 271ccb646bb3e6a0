use crate::constants::{CURSOR_DOT_CLASS, CURSOR_STYLE_SHEET, INTERACTIVE_ANCESTOR_SELECTOR};
use crate::dom::{self, BrowserEnv, Listener};
use crate::frame::{start_loop, AnimationLoop};
use site_core::{CursorFollower, CursorStyle, CursorVisibility, Environment, HoverTarget};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Dot that replaces the system cursor on wide viewports.
///
/// Position is copied into the dot once per animation frame; colour and scale
/// only change when the follower switches mode.
pub struct CustomCursor {
    _frames: AnimationLoop,
    _listeners: Vec<Listener>,
    dot: web::Element,
    sheet: web::Element,
}

impl CustomCursor {
    pub fn mount(document: &web::Document, env: &BrowserEnv) -> anyhow::Result<Option<Self>> {
        if env.is_compact_viewport() {
            log::debug!("[cursor] compact viewport, keeping system cursor");
            return Ok(None);
        }
        let js = |e: JsValue| anyhow::anyhow!("{:?}", e);
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let sheet = document.create_element("style").map_err(js)?;
        sheet.set_text_content(Some(CURSOR_STYLE_SHEET));
        body.append_child(&sheet).map_err(js)?;

        let dot = document.create_element("div").map_err(js)?;
        dot.set_class_name(CURSOR_DOT_CLASS);
        body.append_child(&dot).map_err(js)?;

        let follower = Rc::new(RefCell::new(CursorFollower::new()));
        apply_style(&dot, follower.borrow().style());

        let mut listeners = Vec::with_capacity(5);
        {
            let (follower, dot) = (follower.clone(), dot.clone());
            listeners.push(Listener::mouse(&window, "mousemove", move |ev| {
                let target = hover_target(ev);
                if follower
                    .borrow_mut()
                    .on_move(dom::client_point(ev), &target)
                    .is_some()
                {
                    apply_style(&dot, follower.borrow().style());
                }
            }));
        }
        {
            let (follower, dot) = (follower.clone(), dot.clone());
            listeners.push(Listener::mouse(&window, "mousedown", move |_| {
                if follower.borrow_mut().on_down().is_some() {
                    apply_style(&dot, follower.borrow().style());
                }
            }));
        }
        {
            let (follower, dot) = (follower.clone(), dot.clone());
            listeners.push(Listener::mouse(&window, "mouseup", move |_| {
                if follower.borrow_mut().on_up().is_some() {
                    apply_style(&dot, follower.borrow().style());
                }
            }));
        }
        if let Some(root) = document.document_element() {
            let (follower, dot) = (follower.clone(), dot.clone());
            listeners.push(Listener::mouse(&root, "mouseenter", move |_| {
                if follower.borrow_mut().on_document_enter() {
                    apply_visibility(&dot, follower.borrow().visibility());
                }
            }));
            let (follower, dot) = (follower.clone(), dot.clone());
            listeners.push(Listener::mouse(&root, "mouseleave", move |_| {
                if follower.borrow_mut().on_document_leave() {
                    apply_visibility(&dot, follower.borrow().visibility());
                }
            }));
        }

        let dot_frame = dot.clone();
        let frames = start_loop(move || {
            let p = follower.borrow().position();
            dom::set_style(&dot_frame, "left", &format!("{}px", p.x));
            dom::set_style(&dot_frame, "top", &format!("{}px", p.y));
        });

        log::info!("[cursor] mounted");
        Ok(Some(Self {
            _frames: frames,
            _listeners: listeners,
            dot,
            sheet,
        }))
    }
}

impl Drop for CustomCursor {
    fn drop(&mut self) {
        self.dot.remove();
        self.sheet.remove();
    }
}

fn apply_style(dot: &web::Element, style: CursorStyle) {
    dom::set_style(dot, "transform", &style.transform());
    dom::set_style(dot, "background-color", style.color);
}

fn apply_visibility(dot: &web::Element, visibility: CursorVisibility) {
    let opacity = match visibility {
        CursorVisibility::Shown => "1",
        CursorVisibility::Hidden => "0",
    };
    dom::set_style(dot, "opacity", opacity);
}

/// Describe the element under the pointer for interactivity checks.
fn hover_target(ev: &web::MouseEvent) -> HoverTarget {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return HoverTarget::default();
    };
    let cursor = web::window()
        .and_then(|w| w.get_computed_style(&el).ok().flatten())
        .and_then(|s| s.get_property_value("cursor").ok())
        .unwrap_or_default();
    HoverTarget {
        cursor,
        tag_name: el.tag_name(),
        has_interactive_ancestor: matches!(el.closest(INTERACTIVE_ANCESTOR_SELECTOR), Ok(Some(_))),
    }
}
