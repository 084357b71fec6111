use yew::prelude::*;

const STEPS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Pick two chords",
        "Start with the pair your song needs. Chordly suggests one if you are not sure.",
    ),
    (
        "2",
        "Play for one minute",
        "The app counts clean changes and marks the sloppy ones while the timer runs.",
    ),
    (
        "3",
        "Watch the number climb",
        "Tomorrow you beat today's score. That is the whole trick, and it works.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="section-head">
                <h2>{"Three steps, five minutes"}</h2>
                <p>{"No theory prerequisite. If you can hold the chord, you can drill it."}</p>
            </div>
            <div class="steps">
                { for STEPS.iter().map(|(number, title, body)| html! {
                    <div class="step">
                        <div class="step-number">{*number}</div>
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
