use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debouncer. Each call arms a fresh timer and drops the one
/// before it, so only the last call of a burst ever runs.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        let pending = self.pending.clone();
        let timer = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            action();
        });
        // Replacing the slot cancels whatever was armed before
        *self.pending.borrow_mut() = Some(timer);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // An armed timer must not outlive its owner
        self.pending.borrow_mut().take();
    }
}
