use crate::constants::{MAGNETIC_TRANSITION, TILT_GLARE_SELECTOR, TILT_TRANSITION};
use crate::dom::{self, BrowserEnv, Listener};
use crate::frame::FrameSlot;
use glam::DVec2;
use site_core::{Environment, MagneticPull, MouseParallax, Tilt};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Button that leans toward the pointer while hovered.
pub struct MagneticButton {
    _listeners: [Listener; 2],
}

impl MagneticButton {
    pub fn mount(element: &web::Element) -> Self {
        let (pull, errors) = MagneticPull::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("magnetic", &errors);
        dom::set_style(element, "transition", MAGNETIC_TRANSITION);

        let pull = Rc::new(RefCell::new(pull));
        let (pull_move, el_move) = (pull.clone(), element.clone());
        let on_move = Listener::mouse(element, "mousemove", move |ev| {
            let mut pull = pull_move.borrow_mut();
            pull.on_move(dom::client_point(ev), &dom::rect_of(&el_move));
            dom::set_style(&el_move, "transform", &pull.transform());
        });
        let el_leave = element.clone();
        let on_leave = Listener::mouse(element, "mouseleave", move |_| {
            let mut pull = pull.borrow_mut();
            pull.on_leave();
            dom::set_style(&el_leave, "transform", &pull.transform());
        });
        Self {
            _listeners: [on_move, on_leave],
        }
    }
}

/// Card that tilts in 3D toward the pointer, with an optional glare layer.
/// Moves are coalesced to one update per animation frame.
pub struct TiltCard {
    _listeners: [Listener; 2],
}

impl TiltCard {
    pub fn mount(element: &web::Element, env: &BrowserEnv) -> Option<Self> {
        if env.is_compact_viewport() {
            return None;
        }
        let (tilt, errors) = Tilt::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("tilt", &errors);
        if tilt.is_disabled() {
            return None;
        }
        dom::set_style(element, "transform-style", "preserve-3d");
        dom::set_style(element, "transition", TILT_TRANSITION);
        dom::set_style(element, "will-change", "transform");

        let glare = element.query_selector(TILT_GLARE_SELECTOR).ok().flatten();
        let tilt = Rc::new(RefCell::new(tilt));
        let pointer = Rc::new(Cell::new(DVec2::ZERO));

        let frame = {
            let (tilt, pointer, el, glare) =
                (tilt.clone(), pointer.clone(), element.clone(), glare.clone());
            Rc::new(FrameSlot::new(move || {
                let mut tilt = tilt.borrow_mut();
                tilt.on_move(pointer.get(), &dom::rect_of(&el));
                render(&el, glare.as_ref(), &tilt);
            }))
        };

        let frame_move = frame.clone();
        let on_move = Listener::mouse(element, "mousemove", move |ev| {
            pointer.set(dom::client_point(ev));
            frame_move.schedule();
        });
        let el_leave = element.clone();
        let on_leave = Listener::mouse(element, "mouseleave", move |_| {
            frame.cancel();
            let mut tilt = tilt.borrow_mut();
            tilt.on_leave();
            render(&el_leave, glare.as_ref(), &tilt);
        });
        Some(Self {
            _listeners: [on_move, on_leave],
        })
    }
}

fn render(card: &web::Element, glare: Option<&web::Element>, tilt: &Tilt) {
    dom::set_style(card, "transform", &tilt.transform());
    if let Some(glare) = glare {
        let g = tilt.glare();
        dom::set_style(glare, "background", &g.background());
        dom::set_style(glare, "opacity", if g.intensity > 0.0 { "1" } else { "0" });
    }
}

/// Layer drifting with the global pointer position.
pub struct MouseParallaxLayer {
    _listeners: [Listener; 2],
}

impl MouseParallaxLayer {
    pub fn mount(element: &web::Element) -> Option<Self> {
        let (layer, errors) = MouseParallax::from_attributes(dom::attr_reader(element));
        dom::log_config_errors("mouse-parallax", &errors);
        let layer = Rc::new(RefCell::new(layer));
        let window = web::window()?;
        let root = window.document()?.document_element()?;
        let (layer_move, el_move) = (layer.clone(), element.clone());
        let on_move = Listener::mouse(&window, "mousemove", move |ev| {
            let mut layer = layer_move.borrow_mut();
            layer.on_move(dom::client_point(ev), &dom::rect_of(&el_move));
            dom::set_style(&el_move, "transform", &layer.transform());
        });
        // Pointer left the page: drift back to rest.
        let el_leave = element.clone();
        let on_leave = Listener::mouse(&root, "mouseleave", move |_| {
            let mut layer = layer.borrow_mut();
            layer.on_leave();
            dom::set_style(&el_leave, "transform", &layer.transform());
        });
        Some(Self {
            _listeners: [on_move, on_leave],
        })
    }
}
