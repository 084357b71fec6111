use yew::prelude::*;

use crate::dom::PageFx;

use super::benefits::Benefits;
use super::demo::Demo;
use super::download::Download;
use super::faq::Faq;
use super::features::Features;
use super::footer::Footer;
use super::hero::Hero;
use super::how_it_works::HowItWorks;
use super::nav::Nav;
use super::pricing::Pricing;
use super::testimonials::Testimonials;

#[function_component(App)]
pub fn app() -> Html {
    // Page-wide wiring (scroll effects, reveals, prefetch, performance log)
    // lives in one controller so unmounting tears all of it down together.
    use_effect_with((), move |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let document = window
            .document()
            .expect("should have a document on window");
        let fx = PageFx::mount(&window, &document);
        move || drop(fx)
    });

    html! {
        <>
            <Nav />
            <main>
                <Hero />
                <Features />
                <HowItWorks />
                <Benefits />
                <Demo />
                <Testimonials />
                <Pricing />
                <Faq />
                <Download />
            </main>
            <Footer />
        </>
    }
}
