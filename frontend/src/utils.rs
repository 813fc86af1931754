use log::{debug, info};
use shared::environment::EnvironmentConfig;
use shared::notification::Severity;
use shared::Result;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::auth::AuthGate;
use crate::config::Config;
use crate::notifications::NotificationCenter;
use crate::{date, dom, loading};

/// Name of the namespace object page scripts call into.
pub const NAMESPACE: &str = "careersafeUtils";

/// Standalone alias some pages call without the namespace.
pub const NOTIFY_GLOBAL: &str = "showNotification";

/// The helpers exposed to page scripts, built once at startup.
#[derive(Clone, Debug)]
pub struct Utils {
    notifications: NotificationCenter,
    auth: AuthGate,
    config: EnvironmentConfig,
}

impl Utils {
    pub fn new(notifications: NotificationCenter, auth: AuthGate, config: EnvironmentConfig) -> Self {
        Self {
            notifications,
            auth,
            config,
        }
    }

    pub fn from_window() -> Result<Self> {
        Ok(Self::new(
            NotificationCenter::from_window()?,
            AuthGate::browser(),
            Config::environment().clone(),
        ))
    }

    pub fn show_notification(&self, message: &str, severity: Severity) {
        self.notifications.notify(message, severity);
    }

    pub fn set_loading(&self, element: &Element, is_loading: bool) {
        loading::set_loading(element, is_loading);
    }

    pub fn format_date(&self, value: &JsValue) -> String {
        date::format_js_date(value)
    }

    pub fn check_auth(&self) {
        self.auth.check_current_page();
    }

    /// Publishes the helpers as `window.careersafeUtils` and
    /// `window.showNotification`.
    pub fn install(&self, window: &Window) -> Result<()> {
        let namespace = js_sys::Object::new();

        let notify = self.notify_fn();
        set(&namespace, "showNotification", &notify)?;
        set(window, NOTIFY_GLOBAL, &notify)?;

        let utils = self.clone();
        let set_loading = Closure::<dyn Fn(JsValue, JsValue)>::new(move |element: JsValue, is_loading: JsValue| {
            match element.dyn_into::<Element>() {
                Ok(element) => utils.set_loading(&element, is_loading.is_truthy()),
                Err(_) => debug!("setLoading called without an element"),
            }
        });
        set(&namespace, "setLoading", &set_loading.into_js_value())?;

        let utils = self.clone();
        let format_date = Closure::<dyn Fn(JsValue) -> String>::new(move |value: JsValue| utils.format_date(&value));
        set(&namespace, "formatDate", &format_date.into_js_value())?;

        let utils = self.clone();
        let check_auth = Closure::<dyn Fn()>::new(move || utils.check_auth());
        set(&namespace, "checkAuth", &check_auth.into_js_value())?;

        let config_json = self.config.to_json();
        let config = Closure::<dyn Fn() -> String>::new(move || config_json.clone());
        set(&namespace, "config", &config.into_js_value())?;

        set(window, NAMESPACE, &namespace)?;
        info!("Page utilities installed as window.{}", NAMESPACE);
        Ok(())
    }

    fn notify_fn(&self) -> JsValue {
        let utils = self.clone();
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, severity: JsValue| {
            utils.show_notification(&dom::js_to_text(&message), severity_arg(&severity));
        })
        .into_js_value()
    }
}

/// Only an omitted argument means `info`; `null`, numbers and other
/// casings fall through to the neutral style.
pub fn severity_arg(value: &JsValue) -> Severity {
    if value.is_undefined() {
        Severity::Info
    } else {
        Severity::parse(&dom::js_to_text(value))
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(dom::js_err)
        .map(|_| ())
}
