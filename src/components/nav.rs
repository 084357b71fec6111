use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{Binding, Debouncer};
use crate::util;

const LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How it works"),
    ("#benefits", "Benefits"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

/// Focus wrap for Tab inside the open menu: forward from the last focusable
/// back to the first, backward from the first to the last. Anything else is
/// left to the browser.
fn wrap_target(active: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (backwards, active) {
        (false, Some(i)) if i == len - 1 => Some(0),
        (true, Some(0)) => Some(len - 1),
        _ => None,
    }
}

// The native listeners below outlive any single render, so they read open
// state off the rendered class rather than a captured handle value.
fn menu_is_open(document: &Document) -> bool {
    document
        .get_element_by_id("navMenu")
        .map(|m| m.class_list().contains("active"))
        .unwrap_or(false)
}

fn focus_toggle(document: &Document) {
    if let Some(el) = document
        .get_element_by_id("navToggle")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let menu_ref = use_node_ref();

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    // Picking a destination always collapses the mobile menu
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let mut bindings = Vec::new();

            // Escape closes the menu from anywhere and hands focus back
            {
                let menu_open = menu_open.clone();
                let read_document = document.clone();
                bindings.push(Binding::listen(&document, "keydown", move |e| {
                    let e: KeyboardEvent = e.unchecked_into();
                    if e.key() == "Escape" && menu_is_open(&read_document) {
                        menu_open.set(false);
                        focus_toggle(&read_document);
                    }
                }));
            }

            // Tab stays inside the open menu
            if let Some(menu) = menu_ref.cast::<HtmlElement>() {
                let menu_el: Element = menu.clone().into();
                let menu_open = menu_open.clone();
                let document = document.clone();
                bindings.push(Binding::listen(&menu, "keydown", move |e| {
                    if !menu_el.class_list().contains("active") {
                        return;
                    }
                    let e: KeyboardEvent = e.unchecked_into();
                    match e.key().as_str() {
                        "Tab" => {
                            let focusables = util::query_all_within(
                                &menu_el,
                                "a[href], button:not([disabled]), input:not([disabled])",
                            );
                            let active = document.active_element();
                            let index = active
                                .as_ref()
                                .and_then(|a| focusables.iter().position(|f| f == a));
                            if let Some(next) = wrap_target(index, focusables.len(), e.shift_key())
                            {
                                e.prevent_default();
                                if let Some(el) = focusables[next].dyn_ref::<HtmlElement>() {
                                    let _ = el.focus();
                                }
                            }
                        }
                        "Escape" => {
                            menu_open.set(false);
                            focus_toggle(&document);
                        }
                        _ => {}
                    }
                }));
            }

            // Growing past the breakpoint closes the menu, after the resize
            // burst goes quiet
            {
                let debouncer = Debouncer::new(config::RESIZE_DEBOUNCE_MS);
                let menu_open = menu_open.clone();
                let read_window = window.clone();
                bindings.push(Binding::listen(&window, "resize", move |_| {
                    let menu_open = menu_open.clone();
                    let read_window = read_window.clone();
                    debouncer.call(move || {
                        let width = read_window
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        if width > config::MOBILE_BREAKPOINT_PX {
                            menu_open.set(false);
                        }
                    });
                }));
            }

            move || drop(bindings)
        });
    }

    html! {
        <nav id="nav" class="nav">
            <div class="nav-inner">
                <a class="nav-logo" href="#">{"Chordly"}</a>
                <button
                    id="navToggle"
                    class={classes!("nav-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <ul
                    id="navMenu"
                    ref={menu_ref}
                    class={classes!("nav-menu", (*menu_open).then_some("active"))}
                >
                    { for LINKS.iter().map(|(href, label)| html! {
                        <li><a class="nav-link" href={*href} onclick={close.clone()}>{*label}</a></li>
                    }) }
                    <li><a class="nav-cta" href="#download" onclick={close.clone()}>{"Get the app"}</a></li>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::wrap_target;

    #[test]
    fn test_wrap_forward_from_last() {
        assert_eq!(wrap_target(Some(4), 5, false), Some(0));
    }

    #[test]
    fn test_wrap_backward_from_first() {
        assert_eq!(wrap_target(Some(0), 5, true), Some(4));
    }

    #[test]
    fn test_no_wrap_mid_list() {
        assert_eq!(wrap_target(Some(2), 5, false), None);
        assert_eq!(wrap_target(Some(2), 5, true), None);
    }

    #[test]
    fn test_no_wrap_when_focus_outside_menu() {
        assert_eq!(wrap_target(None, 5, false), None);
        assert_eq!(wrap_target(None, 5, true), None);
    }

    #[test]
    fn test_single_item_menu_wraps_to_itself() {
        assert_eq!(wrap_target(Some(0), 1, false), Some(0));
        assert_eq!(wrap_target(Some(0), 1, true), Some(0));
    }

    #[test]
    fn test_empty_menu() {
        assert_eq!(wrap_target(None, 0, false), None);
    }
}
