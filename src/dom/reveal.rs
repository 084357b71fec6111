use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config;
use crate::model::{self, SlideFrom};
use crate::util;

use super::observe::ObserveOnce;

/// Shared reveal driver. One observer watches every group because the settle
/// styles are identical; the per-group character lives in the hidden
/// transform and the stagger delay applied at registration.
pub struct Reveals {
    observer: ObserveOnce,
}

impl Reveals {
    pub fn new() -> Option<Self> {
        let observer = ObserveOnce::new(
            config::REVEAL_VISIBILITY,
            config::REVEAL_ROOT_MARGIN,
            |target| {
                if let Ok(el) = target.dyn_into::<HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", model::SETTLED_TRANSFORM);
                }
            },
        )?;
        Some(Self { observer })
    }

    /// Hides every match and queues it for its staggered entrance.
    pub fn register(&self, document: &Document, selector: &str, from: SlideFrom, step_secs: f64) {
        for (index, el) in util::query_all(document, selector).into_iter().enumerate() {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let style = html.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", from.hidden_transform());
                let _ =
                    style.set_property("transition", &model::reveal_transition(index, step_secs));
            }
            self.observer.watch(&el);
        }
    }
}
