use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlLinkElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config;
use crate::model::{self, SlideFrom};
use crate::state::PrefetchRegistry;
use crate::util::{self, clog};

use super::frame::FrameThrottle;
use super::listen::Binding;
use super::observe::ObserveOnce;
use super::perf::LcpLogger;
use super::reveal::Reveals;

/// Page-scoped behavior wired once at mount: the condensed-nav scroll state,
/// the anchor router, reveal groups, lazy images, prefetch hints, the scroll
/// progress bar, hero parallax and LCP logging. Dropping the controller
/// removes every listener and observer it installed.
pub struct PageFx {
    bindings: Vec<Binding>,
    _reveals: Option<Reveals>,
    _lazy: Option<ObserveOnce>,
    _perf: Option<LcpLogger>,
    progress_bar: Option<Element>,
}

impl PageFx {
    pub fn mount(window: &Window, document: &Document) -> Self {
        let mut bindings = Vec::new();

        wire_nav_scroll(window, document, &mut bindings);
        wire_anchor_router(window, document, &mut bindings);
        let reveals = wire_reveals(document);
        let lazy = wire_lazy_images(document);
        wire_prefetch(document, &mut bindings);
        wire_load_class(window, document, &mut bindings);
        let progress_bar = wire_progress(window, document, &mut bindings);
        wire_parallax(window, document, &mut bindings);
        inject_keyframes(document);
        let perf = LcpLogger::start(window);

        clog("chordly landing ready");

        Self {
            bindings,
            _reveals: reveals,
            _lazy: lazy,
            _perf: perf,
            progress_bar,
        }
    }
}

impl Drop for PageFx {
    fn drop(&mut self) {
        self.bindings.clear();
        if let Some(bar) = self.progress_bar.take() {
            bar.remove();
        }
    }
}

/// Nav picks up the `scrolled` class past the threshold. Scroll events only
/// arm the frame; the class flip happens at most once per frame.
fn wire_nav_scroll(window: &Window, document: &Document, bindings: &mut Vec<Binding>) {
    let Some(nav) = document.get_element_by_id("nav") else {
        return;
    };
    let read_window = window.clone();
    let throttle = Rc::new(FrameThrottle::new(window, move || {
        let offset = read_window.page_y_offset().unwrap_or(0.0);
        if model::nav_scrolled(offset) {
            let _ = nav.class_list().add_1("scrolled");
        } else {
            let _ = nav.class_list().remove_1("scrolled");
        }
    }));
    bindings.push(Binding::listen_passive(window, "scroll", move |_| {
        throttle.schedule();
    }));
}

/// One click handler covers every in-page anchor. Managed destinations get
/// smooth scrolling offset by the nav height; everything else keeps native
/// jump behavior.
fn wire_anchor_router(window: &Window, document: &Document, bindings: &mut Vec<Binding>) {
    for anchor in util::query_all(document, "a[href^='#']") {
        let window = window.clone();
        let document = document.clone();
        bindings.push(Binding::listen(&anchor, "click", move |e| {
            let Some(href) = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
            else {
                return;
            };
            if !model::is_managed_anchor(&href) {
                return;
            }
            e.prevent_default();
            let Some(id) = model::anchor_target(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let nav_height = document
                .get_element_by_id("nav")
                .and_then(|n| n.dyn_into::<HtmlElement>().ok())
                .map(|n| f64::from(n.offset_height()))
                .unwrap_or(0.0);
            // Box top plus scroll offset stays correct under positioned
            // ancestors, where offsetTop would not
            let doc_top = model::document_top(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
            );
            let top = model::anchor_scroll_top(doc_top, nav_height);
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }));
    }
}

fn wire_reveals(document: &Document) -> Option<Reveals> {
    let reveals = Reveals::new()?;
    reveals.register(
        document,
        ".feature-card",
        SlideFrom::Below,
        config::CARD_STAGGER_SECS,
    );
    reveals.register(
        document,
        ".benefit-item",
        SlideFrom::Left,
        config::CARD_STAGGER_SECS,
    );
    reveals.register(
        document,
        ".testimonial-card",
        SlideFrom::Below,
        config::CARD_STAGGER_SECS,
    );
    reveals.register(
        document,
        ".pricing-card",
        SlideFrom::Below,
        config::WIDE_STAGGER_SECS,
    );
    reveals.register(
        document,
        ".demo-feature",
        SlideFrom::Left,
        config::WIDE_STAGGER_SECS,
    );
    Some(reveals)
}

/// Images carrying `data-src` stay empty until first visible, then get their
/// real source and the `loaded` class.
fn wire_lazy_images(document: &Document) -> Option<ObserveOnce> {
    let images = util::query_all(document, "img[data-src]");
    if images.is_empty() {
        return None;
    }
    let observer = ObserveOnce::new(0.0, "0px", |target| {
        if let Ok(img) = target.dyn_into::<HtmlImageElement>() {
            if let Some(src) = img.dataset().get("src") {
                img.set_src(&src);
                let _ = img.class_list().add_1("loaded");
            }
        }
    })?;
    for img in &images {
        observer.watch(img);
    }
    Some(observer)
}

/// Hovering an outbound link injects `<link rel="prefetch">` into the head,
/// once per unique URL for the lifetime of the page.
fn wire_prefetch(document: &Document, bindings: &mut Vec<Binding>) {
    let registry = Rc::new(RefCell::new(PrefetchRegistry::default()));
    for link in util::query_all(document, "a[href^='http']") {
        let document = document.clone();
        let registry = registry.clone();
        bindings.push(Binding::listen(&link, "mouseenter", move |e| {
            let Some(href) = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
            else {
                return;
            };
            if !registry.borrow_mut().mark(&href) {
                return;
            }
            let Some(head) = document.head() else {
                return;
            };
            let Ok(hint) = document.create_element("link") else {
                return;
            };
            let Ok(hint) = hint.dyn_into::<HtmlLinkElement>() else {
                return;
            };
            hint.set_rel("prefetch");
            hint.set_href(&href);
            let _ = head.append_child(&hint);
        }));
    }
}

fn wire_load_class(window: &Window, document: &Document, bindings: &mut Vec<Binding>) {
    let document = document.clone();
    bindings.push(Binding::listen(window, "load", move |_| {
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1("loaded");
        }
    }));
}

/// Thin gradient bar pinned to the top of the viewport, widened in step with
/// read progress. Updates are cheap enough to run per scroll event.
fn wire_progress(
    window: &Window,
    document: &Document,
    bindings: &mut Vec<Binding>,
) -> Option<Element> {
    let bar = document.create_element("div").ok()?;
    let _ = bar.set_attribute("id", "scrollProgress");
    if let Some(html) = bar.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (prop, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("height", "3px"),
            ("background", "linear-gradient(90deg, #5a67d8 0%, #9f7aea 100%)"),
            ("width", "0%"),
            ("z-index", "10000"),
            ("transition", "width 0.1s ease"),
        ] {
            let _ = style.set_property(prop, value);
        }
    }
    document.body()?.append_child(&bar).ok()?;

    let read_window = window.clone();
    let read_document = document.clone();
    let bar_write = bar.clone();
    bindings.push(Binding::listen_passive(window, "scroll", move |_| {
        let Some(root) = read_document.document_element() else {
            return;
        };
        let pct = model::progress_percent(
            read_window.page_y_offset().unwrap_or(0.0),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        );
        if let Some(html) = bar_write.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("width", &format!("{pct}%"));
        }
    }));
    Some(bar)
}

/// Hero pattern drifts at a fraction of the scroll speed on wide viewports,
/// frozen once the hero leaves the screen.
fn wire_parallax(window: &Window, document: &Document, bindings: &mut Vec<Binding>) {
    let Some(hero) = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(pattern) = document
        .query_selector(".hero-pattern")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let read_window = window.clone();
    let throttle = Rc::new(FrameThrottle::new(window, move || {
        let offset = read_window.page_y_offset().unwrap_or(0.0);
        let width = read_window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        if let Some(shift) =
            model::parallax_shift(offset, f64::from(hero.offset_height()), width)
        {
            let _ = pattern
                .style()
                .set_property("transform", &format!("translateY({shift}px)"));
        }
    }));
    bindings.push(Binding::listen_passive(window, "scroll", move |_| {
        throttle.schedule();
    }));
}

/// The pulse and star-pop keyframes are only referenced from inline styles
/// set at runtime, so they are injected here rather than in the stylesheet.
fn inject_keyframes(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    for css in [
        "@keyframes pulse { 0% { transform: scale(1); } 50% { transform: scale(0.98); } 100% { transform: scale(1); } }",
        "@keyframes starPop { 0% { transform: scale(0); opacity: 0; } 50% { transform: scale(1.2); } 100% { transform: scale(1); opacity: 1; } }",
    ] {
        if let Ok(style) = document.create_element("style") {
            style.set_text_content(Some(css));
            let _ = head.append_child(&style);
        }
    }
}
