use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{Binding, ObserveOnce};
use crate::state::{SwipeDirection, SwipeTracker};
use crate::util::{self, clog};

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Three weeks in and the D to G change that blocked me for a year is just... gone. The counter made it a game.",
        "Maya R.",
        "Self-taught, 8 months in",
    ),
    (
        "I assign Chordly drills as homework. Students come back with clean changes instead of excuses, and I can see the graphs.",
        "Daniel O.",
        "Guitar teacher",
    ),
    (
        "The buzz detector called out my lazy ring finger on day one. My teacher had been saying the same thing for a month.",
        "Priya S.",
        "Weekend player",
    ),
];

/// Pops the stars of one rating row in, left to right.
fn pop_stars(rating: &Element) {
    for (index, star) in util::query_all_within(rating, ".star")
        .into_iter()
        .enumerate()
    {
        let delay = index as u32 * config::STAR_STAGGER_MS;
        Timeout::new(delay, move || {
            if let Ok(star) = star.dyn_into::<HtmlElement>() {
                let _ = star
                    .style()
                    .set_property("animation", "starPop 0.3s ease-out");
            }
        })
        .forget();
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    use_effect_with((), move |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let document = window
            .document()
            .expect("should have a document on window");

        let observer = ObserveOnce::new(config::RATING_VISIBILITY, "0px", |rating| {
            pop_stars(&rating);
        });
        if let Some(observer) = &observer {
            for rating in util::query_all(&document, ".testimonial-rating") {
                observer.watch(&rating);
            }
        }

        // Swipe logging only applies to the single-column phone layout
        let mut bindings: Vec<Binding> = Vec::new();
        let narrow = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .is_some_and(|w| w <= config::MOBILE_BREAKPOINT_PX);
        if narrow {
            if let Ok(Some(grid)) = document.query_selector(".testimonials-grid") {
                let tracker = Rc::new(RefCell::new(SwipeTracker::default()));
                {
                    let tracker = tracker.clone();
                    bindings.push(Binding::listen_passive(&grid, "touchstart", move |e| {
                        let e: TouchEvent = e.unchecked_into();
                        if let Some(touch) = e.changed_touches().item(0) {
                            tracker.borrow_mut().begin(f64::from(touch.screen_x()));
                        }
                    }));
                }
                {
                    let tracker = tracker.clone();
                    bindings.push(Binding::listen_passive(&grid, "touchend", move |e| {
                        let e: TouchEvent = e.unchecked_into();
                        let Some(touch) = e.changed_touches().item(0) else {
                            return;
                        };
                        match tracker.borrow().finish(f64::from(touch.screen_x())) {
                            Some(SwipeDirection::Left) => clog("swiped left on testimonials"),
                            Some(SwipeDirection::Right) => clog("swiped right on testimonials"),
                            None => {}
                        }
                    }));
                }
            }
        }

        move || {
            drop(observer);
            drop(bindings);
        }
    });

    html! {
        <section id="testimonials" class="testimonials">
            <div class="section-head">
                <h2>{"Players keep the streak"}</h2>
                <p>{"Real reviews from the first year on the stores."}</p>
            </div>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                    <div class="testimonial-card">
                        <div class="testimonial-rating">
                            { for (0..5).map(|_| html! {
                                <span class="star">{"\u{2605}"}</span>
                            }) }
                        </div>
                        <p class="testimonial-quote">{*quote}</p>
                        <div class="testimonial-author">
                            <span class="author-name">{*name}</span>
                            <span class="author-role">{*role}</span>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
