use yew::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "\u{1f3a7}",
        "Real-time listening",
        "Point your phone at the guitar and Chordly hears every string, no cables or pickups required.",
    ),
    (
        "\u{23f1}",
        "Change timer",
        "The classic one-minute changes drill, scored automatically so you can stop counting out loud.",
    ),
    (
        "\u{1f4c8}",
        "Progress curves",
        "Every drill lands on a per-chord-pair graph, so plateaus show up before they get discouraging.",
    ),
    (
        "\u{1f9e0}",
        "Smart drill picker",
        "Sessions lead with the changes you miss most, not the ones you already own.",
    ),
    (
        "\u{1f515}",
        "Buzz detection",
        "Muted and buzzing strings get flagged with the finger most likely at fault.",
    ),
    (
        "\u{1f3c6}",
        "Streaks and goals",
        "Five minutes a day keeps the streak alive. Miss a day and the schedule bends, not breaks.",
    ),
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="section-head">
                <h2>{"Everything a practice journal wishes it was"}</h2>
                <p>{"Built around the boring, effective drills teachers actually assign."}</p>
            </div>
            <div class="features-grid">
                { for FEATURES.iter().map(|(icon, title, body)| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
