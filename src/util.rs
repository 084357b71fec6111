// Small DOM-side helpers shared by the dom layer and components.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub fn clog(msg: &str) {
    gloo_console::log!(msg);
}

/// Collects a selector match into a Vec, skipping nodes that are not elements.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Same, scoped to one element's subtree.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}
