use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, ObserveOnce};
use crate::model;
use crate::util;

struct Tier {
    name: &'static str,
    amount: &'static str,
    period: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    featured: bool,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        amount: "0",
        period: "/forever",
        blurb: "The one-minute changes drill and your last week of scores.",
        features: &[
            "Unlimited change drills",
            "Open-chord detection",
            "7-day history",
        ],
        cta: "Start free",
        featured: false,
    },
    Tier {
        name: "Player",
        amount: "12",
        period: "/month",
        blurb: "Full feedback and every graph, for people actually practicing.",
        features: &[
            "Everything in Starter",
            "Buzz and mute detection",
            "Full progress history",
            "Smart drill picker",
        ],
        cta: "Go Player",
        featured: true,
    },
    Tier {
        name: "Studio",
        amount: "29",
        period: "/month",
        blurb: "For teachers. Assign drills and watch the whole roster improve.",
        features: &[
            "Everything in Player",
            "Up to 30 student seats",
            "Assigned homework drills",
            "Roster progress board",
        ],
        cta: "Run a studio",
        featured: false,
    },
];

/// Counts a card's price up from zero. Free tiers stay put; re-entries are
/// blocked by the `animated` class.
fn animate_price(card: &Element) {
    let Ok(Some(amount)) = card.query_selector(".price-amount") else {
        return;
    };
    if amount.class_list().contains("animated") {
        return;
    }
    let text = amount.text_content().unwrap_or_default();
    let Some((target, style)) = model::counter_plan(&text) else {
        return;
    };
    let _ = amount.class_list().add_1("animated");
    dom::run_count_up(
        &amount,
        model::CountUp::new(target, config::PRICE_COUNT_MS, style),
    );
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let card_refs = use_mut_ref(|| {
        (0..TIERS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<NodeRef>>()
    });

    use_effect_with((), move |_| {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("should have a document on window");
        let observer = ObserveOnce::new(config::PRICE_VISIBILITY, "0px", |card| {
            animate_price(&card);
        });
        if let Some(observer) = &observer {
            for card in util::query_all(&document, ".pricing-card") {
                observer.watch(&card);
            }
        }
        move || drop(observer)
    });

    let refs = card_refs.borrow();
    html! {
        <section id="pricing" class="pricing">
            <div class="section-head">
                <h2>{"Pay for feedback, not flashcards"}</h2>
                <p>{"Every tier includes the core drill. Upgrade when you want the graphs."}</p>
            </div>
            <div class="pricing-grid">
                { for TIERS.iter().enumerate().map(|(index, tier)| {
                    let card_ref = refs[index].clone();
                    let featured = tier.featured;
                    // The featured card keeps its accent border; only the
                    // plain cards pick one up on hover.
                    let enter = {
                        let card_ref = card_ref.clone();
                        Callback::from(move |_: MouseEvent| {
                            if featured {
                                return;
                            }
                            if let Some(card) = card_ref.cast::<HtmlElement>() {
                                let _ = card
                                    .style()
                                    .set_property("border-color", "var(--primary)");
                            }
                        })
                    };
                    let leave = {
                        let card_ref = card_ref.clone();
                        Callback::from(move |_: MouseEvent| {
                            if featured {
                                return;
                            }
                            if let Some(card) = card_ref.cast::<HtmlElement>() {
                                let _ = card.style().remove_property("border-color");
                            }
                        })
                    };
                    html! {
                        <div
                            class={classes!("pricing-card", featured.then_some("featured"))}
                            ref={card_ref}
                            onmouseenter={enter}
                            onmouseleave={leave}
                        >
                            { if featured {
                                html! { <span class="featured-badge">{"Most popular"}</span> }
                            } else {
                                html! {}
                            } }
                            <h3 class="tier-name">{tier.name}</h3>
                            <div class="price">
                                <span class="price-currency">{"$"}</span>
                                <span class="price-amount">{tier.amount}</span>
                                <span class="price-period">{tier.period}</span>
                            </div>
                            <p class="tier-blurb">{tier.blurb}</p>
                            <ul class="tier-features">
                                { for tier.features.iter().map(|feature| html! {
                                    <li>{*feature}</li>
                                }) }
                            </ul>
                            <a
                                class={classes!("tier-cta", featured.then_some("primary"))}
                                href="#download"
                            >
                                {tier.cta}
                            </a>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
