use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, Window};

use crate::util::clog;

/// Logs largest-contentful-paint timings. Browsers without the API are
/// detected up front and the whole thing is skipped.
pub struct LcpLogger {
    observer: PerformanceObserver,
    _callback: Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>,
}

impl LcpLogger {
    pub fn start(window: &Window) -> Option<Self> {
        if !Reflect::has(window, &JsValue::from_str("PerformanceObserver")).unwrap_or(false) {
            clog("performance monitoring unavailable");
            return None;
        }
        let callback = Closure::wrap(Box::new(
            move |entries: PerformanceObserverEntryList, _obs: PerformanceObserver| {
                for entry in entries.get_entries().iter() {
                    let entry: PerformanceEntry = entry.unchecked_into();
                    if entry.entry_type() == "largest-contentful-paint" {
                        clog(&format!("LCP: {}", lcp_millis(&entry)));
                    }
                }
            },
        )
            as Box<dyn FnMut(_, _)>);
        let observer = match PerformanceObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(_) => {
                clog("performance monitoring unavailable");
                return None;
            }
        };
        // The init dictionary is built by hand; entryTypes is its only field here
        let init = Object::new();
        let types = Array::of1(&JsValue::from_str("largest-contentful-paint"));
        let _ = Reflect::set(&init, &JsValue::from_str("entryTypes"), &types);
        let _ = observer.observe(init.unchecked_ref());
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Render time when the entry carries one, else load time, else the start
/// stamp. The paint-specific fields sit outside PerformanceEntry proper.
fn lcp_millis(entry: &PerformanceEntry) -> f64 {
    let field = |name: &str| {
        Reflect::get(entry, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|t| *t > 0.0)
    };
    field("renderTime")
        .or_else(|| field("loadTime"))
        .unwrap_or_else(|| entry.start_time())
}

impl Drop for LcpLogger {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
