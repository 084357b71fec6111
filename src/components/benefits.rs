use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::dom::ObserveOnce;
use crate::util;

const BENEFITS: &[(&str, &str)] = &[
    (
        "Practice that compounds",
        "Short daily drills beat weekend marathons. Chordly makes the short version effortless to start.",
    ),
    (
        "Honest feedback",
        "A metronome cannot tell you the G string buzzed. Chordly can, and says which finger to blame.",
    ),
    (
        "Songs sooner",
        "Clean changes are the gate between strumming patterns and actual songs. Open it faster.",
    ),
    (
        "Proof you improved",
        "The graph does not flatter. When it climbs, you earned it.",
    ),
];

const BARS: &[(&str, &str)] = &[
    ("Week 1", "25%"),
    ("Week 2", "45%"),
    ("Week 3", "70%"),
    ("Week 4", "92%"),
];

/// Kicks the bar-fill animation, one bar at a time. The bars render at
/// their final widths but sit collapsed (scaleX 0) until this runs.
fn fill_bars(container: &Element) {
    for (index, bar) in util::query_all_within(container, ".bar-fill")
        .into_iter()
        .enumerate()
    {
        let delay = index as u32 * config::CHART_BAR_STAGGER_MS;
        Timeout::new(delay, move || {
            if let Ok(bar) = bar.dyn_into::<HtmlElement>() {
                let _ = bar
                    .style()
                    .set_property("animation", "fillBar 1.5s ease-out forwards");
            }
        })
        .forget();
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    use_effect_with((), move |_| {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("should have a document on window");
        let observer = ObserveOnce::new(config::CHART_VISIBILITY, "0px", |container| {
            fill_bars(&container);
        });
        if let Some(observer) = &observer {
            if let Ok(Some(chart)) = document.query_selector(".chart-container") {
                observer.watch(&chart);
            }
        }
        move || drop(observer)
    });

    html! {
        <section id="benefits" class="benefits">
            <div class="section-head">
                <h2>{"Why it sticks"}</h2>
                <p>{"Average clean changes per minute across the first month, all players."}</p>
            </div>
            <div class="benefits-layout">
                <div class="benefits-list">
                    { for BENEFITS.iter().map(|(title, body)| html! {
                        <div class="benefit-item">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
                <div class="chart-container">
                    <h3 class="chart-title">{"Clean changes per minute"}</h3>
                    { for BARS.iter().map(|(label, width)| html! {
                        <div class="chart-bar">
                            <span class="chart-label">{*label}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style={format!("width: {width}")}></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
