use log::{debug, info, warn};
use wasm_bindgen::prelude::*;

pub mod auth;
pub mod config;
pub mod date;
pub mod dom;
pub mod effects;
pub mod loading;
pub mod notifications;
pub mod scheduler;
pub mod service_worker;
pub mod tooltip;
pub mod utils;

use crate::config::Config;
use crate::tooltip::TooltipController;
use crate::utils::Utils;

/// Publishes the helpers page scripts call. Runs as soon as the module
/// starts so scripts evaluated before DOM-ready already find them.
pub fn init_globals(utils: &Utils) -> shared::Result<()> {
    utils.install(&dom::window()?)
}

/// Non-critical setup: entrance animations and tooltips.
pub fn init_deferred() -> shared::Result<()> {
    let document = dom::document()?;

    let staggered = effects::stagger_fade_ups(&document)?;
    debug!("Staggered {} fade-up elements", staggered);

    TooltipController::new(document).attach()?.forget();
    Ok(())
}

/// Startup order: globals now, the login redirect at DOM-ready, then
/// animations and tooltips once the browser is idle.
#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    let utils = Utils::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    info!("API base: {}", Config::api_base_url());

    if let Err(e) = init_globals(&utils) {
        warn!("Failed to publish page utilities: {}", e);
    }

    scheduler::on_dom_ready(move || {
        utils.check_auth();

        scheduler::run_when_idle(|| {
            if let Err(e) = init_deferred() {
                warn!("Deferred page setup failed: {}", e);
            }
        });
    });

    service_worker::register(service_worker::SERVICE_WORKER_SCRIPT);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Initializing page runtime...");

    run_app()
}
