use log::{info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::dom;

/// Script registered for installability. It is the bootstrap that loads the
/// `careersafe-sw` wasm; see the README for its contents.
pub const SERVICE_WORKER_SCRIPT: &str = "sw.js";

/// Registers the install stub when the browser supports service workers.
/// Registration failures are logged and otherwise ignored.
pub fn register(script: &'static str) {
    let Ok(window) = dom::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        info!("Service workers unsupported, skipping registration");
        return;
    }

    let promise = navigator.service_worker().register(script);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => info!("Service worker registered: {}", script),
            Err(e) => warn!("Service worker registration failed: {}", dom::js_to_text(&e)),
        }
    });
}
