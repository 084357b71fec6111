use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::state::FrameGate;

/// Coalesces a burst of events into at most one animation-frame callback in
/// flight. Calls to `schedule` while a frame is pending are dropped; the work
/// closure reads fresh state when the frame fires, so nothing is lost.
pub struct FrameThrottle {
    window: Window,
    gate: Rc<FrameGate>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameThrottle {
    pub fn new(window: &Window, mut work: impl FnMut() + 'static) -> Self {
        let gate = Rc::new(FrameGate::default());
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let gate = gate.clone();
            let raf_id = raf_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                raf_id.set(None);
                work();
                gate.release();
            }) as Box<dyn FnMut()>));
        }
        Self {
            window: window.clone(),
            gate,
            frame,
            raf_id,
        }
    }

    /// Requests one run of the work on the next frame; no-op while one is
    /// already queued.
    pub fn schedule(&self) {
        if !self.gate.try_acquire() {
            return;
        }
        if let Some(cb) = &*self.frame.borrow() {
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(_) => self.gate.release(),
            }
        }
    }
}

impl Drop for FrameThrottle {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
