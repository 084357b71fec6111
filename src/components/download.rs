use yew::prelude::*;

use super::store_buttons::StoreButtons;

#[function_component(Download)]
pub fn download() -> Html {
    html! {
        <section id="download" class="download">
            <div class="download-inner">
                <h2>{"Your next song is one clean change away"}</h2>
                <p>{"Free to start. Five minutes a day. The graph does the motivating."}</p>
                <StoreButtons />
                <p class="download-note">{"iOS 16+ and Android 11+. No account needed for the free drills."}</p>
            </div>
        </section>
    }
}
