use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopShared {
    frame_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopShared {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            self.frame_id
                .set(w.request_animation_frame(tick.as_ref().unchecked_ref()).ok());
        }
    }
}

/// `requestAnimationFrame` loop that re-schedules itself every tick.
/// Dropping it cancels the pending frame and ends the loop.
pub struct AnimationLoop {
    shared: Rc<LoopShared>,
}

pub fn start_loop(mut frame: impl FnMut() + 'static) -> AnimationLoop {
    let shared = Rc::new(LoopShared {
        frame_id: Cell::new(None),
        tick: RefCell::new(None),
    });
    let weak: Weak<LoopShared> = Rc::downgrade(&shared);
    *shared.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        if let Some(shared) = weak.upgrade() {
            shared.request();
        }
    }) as Box<dyn FnMut()>));
    shared.request();
    AnimationLoop { shared }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.shared.frame_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.shared.tick.borrow_mut().take();
    }
}

/// A single deferred frame callback. Scheduling again before it runs
/// replaces the pending frame, so bursts of input collapse into one update.
pub struct FrameSlot {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameSlot {
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            frame();
        }) as Box<dyn FnMut()>);
        Self { pending, callback }
    }

    pub fn schedule(&self) {
        self.cancel();
        if let Some(w) = web::window() {
            self.pending.set(
                w.request_animation_frame(self.callback.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
