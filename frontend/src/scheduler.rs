use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;

/// Fallback delay when `requestIdleCallback` is unavailable.
pub const IDLE_FALLBACK_MS: u32 = 1;

/// Runs `f` once the document is parsed. If it already is, `f` still runs
/// asynchronously so callers see the same ordering either way.
pub fn on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window().and_then(|w| w.document());
    match document {
        Some(document) if document.ready_state() == "loading" => {
            EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
        }
        _ => {
            Timeout::new(0, f).forget();
        }
    }
}

/// Runs `f` during the next idle period, or shortly if the browser has no
/// idle callback support.
pub fn run_when_idle<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        Timeout::new(IDLE_FALLBACK_MS, f).forget();
        return;
    };

    let idle = js_sys::Reflect::get(&window, &JsValue::from_str("requestIdleCallback"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok());

    match idle {
        Some(request_idle) => {
            let callback = Closure::once_into_js(f);
            if let Err(e) = request_idle.call1(&window, &callback) {
                // The callback was handed to JS; nothing left to fall back with.
                warn!("requestIdleCallback failed: {:?}", e);
            }
        }
        None => {
            debug!("requestIdleCallback unavailable, using timeout");
            Timeout::new(IDLE_FALLBACK_MS, f).forget();
        }
    }
}
