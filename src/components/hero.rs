use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, ObserveOnce};
use crate::model;
use crate::util;

use super::store_buttons::StoreButtons;

const STATS: &[(&str, &str)] = &[
    ("12,500+", "Active players"),
    ("340,000+", "Chord changes clocked"),
    ("98%", "Keep practicing after week one"),
];

/// Starts the count-up for one stat tile. The `animated` class is the
/// idempotence marker; a tile that carries it already ran.
fn animate_stat(stat: &Element) {
    let Ok(Some(number)) = stat.query_selector(".stat-number") else {
        return;
    };
    if number.class_list().contains("animated") {
        return;
    }
    let text = number.text_content().unwrap_or_default();
    let Some((target, style)) = model::counter_plan(&text) else {
        return;
    };
    let _ = number.class_list().add_1("animated");
    dom::run_count_up(
        &number,
        model::CountUp::new(target, config::STAT_COUNT_MS, style),
    );
}

#[function_component(Hero)]
pub fn hero() -> Html {
    // Stat numbers count up from zero once half the tile scrolls into view
    use_effect_with((), move |_| {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("should have a document on window");
        let observer = ObserveOnce::new(config::STAT_VISIBILITY, "0px", |stat| {
            animate_stat(&stat);
        });
        if let Some(observer) = &observer {
            for stat in util::query_all(&document, ".stat") {
                observer.watch(&stat);
            }
        }
        move || drop(observer)
    });

    html! {
        <section class="hero">
            <div class="hero-pattern"></div>
            <div class="hero-inner">
                <h1>{"Nail every chord change"}</h1>
                <p class="hero-sub">
                    {"Chordly listens while you play and turns slow, buzzy changes into clean ones with five-minute daily drills."}
                </p>
                <StoreButtons />
                <div class="hero-stats">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat">
                            <span class="stat-number">{*number}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
