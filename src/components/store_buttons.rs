use yew::prelude::*;

use crate::util::clog;

/// Paired App Store / Play Store badges, used in the hero and again in the
/// download band. The store pages do not exist yet, so a click only logs;
/// the `#` href is swallowed by the anchor router.
#[function_component(StoreButtons)]
pub fn store_buttons() -> Html {
    let log_tap = Callback::from(|_: MouseEvent| {
        clog("navigating to app store");
    });

    html! {
        <div class="store-buttons">
            <a class="store-button" href="#" onclick={log_tap.clone()}>
                <span class="store-icon">{"\u{f8ff}"}</span>
                <span class="store-text">
                    <span class="store-hint">{"Download on the"}</span>
                    <span class="store-name">{"App Store"}</span>
                </span>
            </a>
            <a class="store-button" href="#" onclick={log_tap}>
                <span class="store-icon">{"\u{25b6}"}</span>
                <span class="store-text">
                    <span class="store-hint">{"Get it on"}</span>
                    <span class="store-name">{"Google Play"}</span>
                </span>
            </a>
        </div>
    }
}
