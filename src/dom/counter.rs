use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::config;
use crate::model::CountUp;

/// Drives one count-up against an element's text at the repaint cadence.
/// The interval owns itself through the shared slot and clears that slot
/// when the counter settles, so the timer stops without outside help.
pub fn run_count_up(el: &Element, mut counter: CountUp) {
    counter.start();
    let el = el.clone();
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    let interval = Interval::new(config::COUNTER_TICK_MS, move || {
        counter.tick(config::COUNTER_TICK_MS);
        el.set_text_content(Some(&counter.display()));
        if counter.is_settled() {
            slot_tick.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(interval);
}
