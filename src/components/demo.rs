use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::util::clog;

const DEMO_FEATURES: &[(&str, &str)] = &[
    (
        "Live chord read",
        "The detected chord and any dead strings show on screen while you play.",
    ),
    (
        "Instant replay",
        "Tap any flagged change to hear your own recording of it.",
    ),
    (
        "Shareable scorecard",
        "Session summaries export as an image for your teacher or your group chat.",
    ),
];

#[function_component(Demo)]
pub fn demo() -> Html {
    let video_ref = use_node_ref();

    let pulse = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            clog("video modal would open here");
            let Some(frame) = video_ref.cast::<HtmlElement>() else {
                return;
            };
            let _ = frame
                .style()
                .set_property("animation", "pulse 0.5s ease-out");
            Timeout::new(config::VIDEO_PULSE_MS, move || {
                let _ = frame.style().remove_property("animation");
            })
            .forget();
        })
    };

    html! {
        <section id="demo" class="demo">
            <div class="section-head">
                <h2>{"See a session"}</h2>
                <p>{"Ninety seconds from opening the app to a scored drill."}</p>
            </div>
            <div class="demo-layout">
                <div class="video-placeholder" ref={video_ref} onclick={pulse}>
                    <span class="play-icon">{"\u{25b6}"}</span>
                    <span class="video-caption">{"Watch the walkthrough"}</span>
                </div>
                <div class="demo-side">
                    <img
                        class="demo-screen"
                        data-src="assets/screen-practice.svg"
                        alt="Practice screen mid-drill, G to C"
                    />
                    <div class="demo-list">
                        { for DEMO_FEATURES.iter().map(|(title, body)| html! {
                            <div class="demo-feature">
                                <h4>{*title}</h4>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
