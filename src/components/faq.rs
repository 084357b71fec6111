use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

const ENTRIES: &[(&str, &str)] = &[
    (
        "Do I need an electric guitar?",
        "No. The microphone listens to whatever you play, so acoustic, electric, classical and even ukulele all work. Unplugged is fine.",
    ),
    (
        "How does Chordly hear my chords?",
        "The audio is analysed on your phone in real time. Nothing is recorded or uploaded unless you explicitly save a replay.",
    ),
    (
        "Does it work offline?",
        "Every drill runs entirely on-device. Scores sync to your graphs the next time you are online.",
    ),
    (
        "Is the free tier actually free?",
        "Forever. The one-minute changes drill and a week of history never expire. Paid tiers add feedback depth and full history, not the basics.",
    ),
    (
        "What about barre chords?",
        "The detector covers barre shapes up the neck. Barre drills unlock automatically once your open-chord changes pass 40 per minute.",
    ),
    (
        "Can my kid use it?",
        "Yes. There are no ads and no social feed, and the Studio tier is built for exactly that kind of supervised practice.",
    ),
];

/// One panel open at a time; clicking the open one closes it.
fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Maps an arrow key on question `index` to the question that should take
/// focus. Movement clamps at both ends rather than wrapping.
fn arrow_target(index: usize, len: usize, key: &str) -> Option<usize> {
    match key {
        "ArrowDown" => Some((index + 1).min(len.saturating_sub(1))),
        "ArrowUp" => Some(index.saturating_sub(1)),
        _ => None,
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);
    let question_refs = use_mut_ref(|| {
        (0..ENTRIES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<NodeRef>>()
    });

    let refs = question_refs.borrow();
    html! {
        <section id="faq" class="faq">
            <div class="section-head">
                <h2>{"Questions, answered"}</h2>
                <p>{"Anything else, write to hello@chordly.app."}</p>
            </div>
            <div class="faq-list">
                { for ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = *open == Some(index);
                    let question_ref = refs[index].clone();
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| {
                            open.set(next_open(*open, index));
                        })
                    };
                    // preventDefault on keydown also suppresses the native
                    // click a button would synthesise for Enter and Space,
                    // so each press toggles exactly once.
                    let keynav = {
                        let open = open.clone();
                        let question_refs = question_refs.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            let key = e.key();
                            match key.as_str() {
                                "Enter" | " " => {
                                    e.prevent_default();
                                    open.set(next_open(*open, index));
                                }
                                "ArrowDown" | "ArrowUp" => {
                                    e.prevent_default();
                                    if let Some(target) =
                                        arrow_target(index, ENTRIES.len(), &key)
                                    {
                                        if let Some(button) = question_refs.borrow()[target]
                                            .cast::<HtmlElement>()
                                        {
                                            let _ = button.focus();
                                        }
                                    }
                                }
                                _ => {}
                            }
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then_some("active"))}>
                            <button
                                class="faq-question"
                                ref={question_ref}
                                aria-expanded={is_open.to_string()}
                                onclick={toggle}
                                onkeydown={keynav}
                            >
                                <span>{*question}</span>
                                <span class="faq-icon">
                                    { if is_open { "\u{2212}" } else { "+" } }
                                </span>
                            </button>
                            <div class="faq-answer">
                                <p>{*answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_open_toggles_and_switches() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 2), None);
        assert_eq!(next_open(Some(1), 4), Some(4));
    }

    #[test]
    fn test_arrow_target_moves_between_questions() {
        assert_eq!(arrow_target(0, 6, "ArrowDown"), Some(1));
        assert_eq!(arrow_target(3, 6, "ArrowUp"), Some(2));
    }

    #[test]
    fn test_arrow_target_clamps_at_both_ends() {
        assert_eq!(arrow_target(5, 6, "ArrowDown"), Some(5));
        assert_eq!(arrow_target(0, 6, "ArrowUp"), Some(0));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(arrow_target(2, 6, "Tab"), None);
        assert_eq!(arrow_target(2, 6, "Escape"), None);
    }
}
