//! Installability shim. Every fetch goes straight to the network; nothing
//! is cached.

use gloo::events::EventListener;
use js_sys::Promise;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{FetchEvent, Request, ServiceWorkerGlobalScope};

/// Where requests are forwarded to.
pub trait Network {
    fn fetch(&self, request: &Request) -> Promise;
}

impl Network for ServiceWorkerGlobalScope {
    fn fetch(&self, request: &Request) -> Promise {
        self.fetch_with_request(request)
    }
}

/// The network's answer for `request`, untouched.
pub fn pass_through<N: Network>(network: &N, request: &Request) -> Promise {
    network.fetch(request)
}

pub fn handle_fetch<N: Network>(network: &N, event: &FetchEvent) -> Result<(), JsValue> {
    let request = event.request();
    debug!("Forwarding {}", request.url());
    event.respond_with(&pass_through(network, &request))
}

/// Hooks the install and fetch events. The listeners live as long as the
/// worker.
pub fn register(scope: &ServiceWorkerGlobalScope) {
    EventListener::new(scope, "install", |_| {
        info!("Service Worker: Installed");
    })
    .forget();

    let network = scope.clone();
    EventListener::new(scope, "fetch", move |event| {
        let event: &FetchEvent = event.unchecked_ref();
        if let Err(e) = handle_fetch(&network, event) {
            warn!("respondWith failed: {:?}", e);
        }
    })
    .forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    console_error_panic_hook::set_once();

    let global = js_sys::global();
    // The same module is loaded by test pages, which are not worker scopes.
    if !js_sys::Reflect::has(&global, &JsValue::from_str("ServiceWorkerGlobalScope"))? {
        debug!("Not a service worker scope, skipping registration");
        return Ok(());
    }

    register(global.unchecked_ref::<ServiceWorkerGlobalScope>());
    Ok(())
}
