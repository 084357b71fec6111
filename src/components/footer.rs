use yew::prelude::*;

const PRODUCT_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
    ("#download", "Download"),
];

// External links double as prefetch targets on hover
const COMMUNITY_LINKS: &[(&str, &str)] = &[
    ("https://github.com/chordly-app", "GitHub"),
    ("https://twitter.com/chordlyapp", "Twitter"),
    ("mailto:hello@chordly.app", "Email us"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">{"Chordly"}</span>
                    <p>{"Practice that listens back."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Product"}</h4>
                    <ul>
                        { for PRODUCT_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Community"}</h4>
                    <ul>
                        { for COMMUNITY_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <span>{"\u{a9} 2026 Chordly. All rights reserved."}</span>
            </div>
        </footer>
    }
}
