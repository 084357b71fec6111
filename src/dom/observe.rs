use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fire-once visibility watcher: the handler runs the first time a watched
/// element crosses the threshold, and that element is unobserved before the
/// handler sees it. Dropping disconnects the whole observer.
pub struct ObserveOnce {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserveOnce {
    /// `None` when the observer cannot be constructed, e.g. in a browser
    /// without IntersectionObserver; callers skip the behavior in that case.
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_visible: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_visible(target);
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn watch(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for ObserveOnce {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
