use careersafe_frontend::auth::{BrowserStorage, FlagStore};
use careersafe_frontend::dom;
use careersafe_frontend::effects::stagger_fade_ups;
use careersafe_frontend::loading::{set_loading, SAVED_CONTENT_ATTRIBUTE, SPINNER_MARKUP};
use careersafe_frontend::notifications::{NotificationCenter, NOTIFICATION_ID_ATTRIBUTE};
use careersafe_frontend::tooltip::TooltipController;
use careersafe_frontend::utils::{Utils, NAMESPACE};
use careersafe_frontend::{config::Config, date};
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use shared::auth::AUTH_FLAG_KEY;
use shared::notification::{lifetime_ms, Severity};
use shared::tooltip::{TOOLTIP_ATTRIBUTE, TOOLTIP_ID};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Slack for timer jitter on top of the notification lifetime.
const EPSILON_MS: u32 = 200;

fn document() -> Document {
    dom::document().unwrap()
}

fn notification_selector(id: &uuid::Uuid) -> String {
    format!("[{}=\"{}\"]", NOTIFICATION_ID_ATTRIBUTE, id)
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

fn tagged_element(text: &str) -> HtmlElement {
    let doc = document();
    let el: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    el.set_attribute(TOOLTIP_ATTRIBUTE, text).unwrap();
    el.set_text_content(Some("hover me"));
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn fire(target: &Element, kind: &str) {
    target.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

#[wasm_bindgen_test]
async fn test_notification_inserted_then_removed() {
    let center = NotificationCenter::from_window().unwrap();

    for severity in [Severity::Info, Severity::Success, Severity::Error] {
        let id = center.try_notify("Saved", severity).unwrap();
        let selector = notification_selector(&id);
        assert_eq!(count(&selector), 1);

        let el = document().query_selector(&selector).unwrap().unwrap();
        assert!(el.class_name().contains(severity.classes()));
        assert!(el.text_content().unwrap().contains(severity.icon()));

        TimeoutFuture::new(lifetime_ms() + EPSILON_MS).await;
        assert_eq!(count(&selector), 0);
    }
}

#[wasm_bindgen_test]
async fn test_notification_still_visible_before_dismiss() {
    let center = NotificationCenter::from_window().unwrap();
    let id = center.try_notify("Working", Severity::Info).unwrap();

    TimeoutFuture::new(100).await;
    let el: HtmlElement = document()
        .query_selector(&notification_selector(&id))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(!el.style().get_property_value("transform").unwrap().is_empty());
    assert_eq!(el.style().get_property_value("opacity").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_unknown_severity_uses_bullet() {
    let center = NotificationCenter::from_window().unwrap();
    let id = center
        .try_notify("Heads up", Severity::from("critical"))
        .unwrap();

    let el = document()
        .query_selector(&notification_selector(&id))
        .unwrap()
        .unwrap();
    assert!(el.text_content().unwrap().contains('•'));
    assert!(el.class_name().contains("bg-gray-500"));
}

#[wasm_bindgen_test]
fn test_message_is_text_not_markup() {
    let center = NotificationCenter::from_window().unwrap();
    let id = center
        .try_notify("<b>bold</b>", Severity::Info)
        .unwrap();

    let el = document()
        .query_selector(&notification_selector(&id))
        .unwrap()
        .unwrap();
    assert!(el.query_selector("b").unwrap().is_none());
    assert!(el.text_content().unwrap().contains("<b>bold</b>"));
}

#[wasm_bindgen_test]
fn test_tooltip_enter_and_leave_same_tick() {
    let target = tagged_element("Upload your resume");
    let controller = TooltipController::new(document());
    let bindings = controller.attach().unwrap();
    assert!(!bindings.is_empty());

    fire(&target, "mouseenter");
    fire(&target, "mouseleave");

    assert_eq!(count(&format!("#{}", TOOLTIP_ID)), 0);
    assert!(!controller.is_shown());
    target.remove();
}

#[wasm_bindgen_test]
fn test_repeated_enter_keeps_single_tooltip() {
    let first = tagged_element("First");
    let second = tagged_element("Second");
    let controller = TooltipController::new(document());
    let _bindings = controller.attach().unwrap();

    fire(&first, "mouseenter");
    fire(&second, "mouseenter");
    fire(&first, "mouseenter");

    assert_eq!(count(&format!("#{}", TOOLTIP_ID)), 1);
    let tooltip = document().get_element_by_id(TOOLTIP_ID).unwrap();
    assert_eq!(tooltip.text_content().unwrap(), "First");

    fire(&first, "mouseleave");
    assert_eq!(count(&format!("#{}", TOOLTIP_ID)), 0);
    first.remove();
    second.remove();
}

#[wasm_bindgen_test]
fn test_tooltip_sits_above_target() {
    let target = tagged_element("Above");
    let controller = TooltipController::new(document());
    controller.show(&target).unwrap();

    let tooltip: HtmlElement = document()
        .get_element_by_id(TOOLTIP_ID)
        .unwrap()
        .dyn_into()
        .unwrap();
    let expected_top = target.get_bounding_client_rect().top() - 30.0;
    let top: f64 = tooltip
        .style()
        .get_property_value("top")
        .unwrap()
        .trim_end_matches("px")
        .parse()
        .unwrap();
    assert!((top - expected_top).abs() < 0.01);

    controller.hide();
    controller.hide();
    assert_eq!(count(&format!("#{}", TOOLTIP_ID)), 0);
    target.remove();
}

#[wasm_bindgen_test]
fn test_loading_state_round_trip() {
    let doc = document();
    let button = doc.create_element("button").unwrap();
    button.set_inner_html("<span>Submit</span>");

    set_loading(&button, true);
    set_loading(&button, true);
    assert!(button.has_attribute("disabled"));
    assert_eq!(button.inner_html(), SPINNER_MARKUP);

    set_loading(&button, false);
    assert!(!button.has_attribute("disabled"));
    assert!(!button.has_attribute(SAVED_CONTENT_ATTRIBUTE));
    assert_eq!(button.inner_html(), "<span>Submit</span>");
}

#[wasm_bindgen_test]
fn test_fade_ups_are_staggered() {
    let doc = document();
    let body = doc.body().unwrap();
    let mut added = Vec::new();
    for _ in 0..3 {
        let el = doc.create_element("div").unwrap();
        el.set_class_name("fade-up");
        body.append_child(&el).unwrap();
        added.push(el.dyn_into::<HtmlElement>().unwrap());
    }

    assert!(stagger_fade_ups(&doc).unwrap() >= 3);
    let delays: Vec<String> = added
        .iter()
        .map(|el| el.style().get_property_value("animation-delay").unwrap())
        .collect();
    assert!(delays.iter().all(|d| d.ends_with('s')));
    assert_ne!(delays[0], delays[1]);

    for el in added {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn test_browser_storage_reads_flag_presence() {
    LocalStorage::delete(AUTH_FLAG_KEY);
    assert!(!BrowserStorage.has_flag(AUTH_FLAG_KEY).unwrap());

    LocalStorage::set(AUTH_FLAG_KEY, "jane@example.com").unwrap();
    assert!(BrowserStorage.has_flag(AUTH_FLAG_KEY).unwrap());

    LocalStorage::delete(AUTH_FLAG_KEY);
}

#[wasm_bindgen_test]
fn test_format_date_from_js_values() {
    assert_eq!(
        date::format_js_date(&JsValue::from_str("2024-01-05T15:07:00")),
        "Jan 5, 2024, 03:07 PM"
    );
    assert_eq!(date::format_js_date(&JsValue::from_str("nope")), "Invalid Date");
    assert_eq!(date::format_js_date(&JsValue::NULL), "Invalid Date");

    let local = js_sys::Date::new_with_year_month_day_hr_min(2024, 0, 5, 15, 7);
    assert_eq!(date::format_js_date(&local), "Jan 5, 2024, 03:07 PM");
}

#[wasm_bindgen_test]
fn test_namespace_is_installed() {
    let window = dom::window().unwrap();
    let utils = Utils::from_window().unwrap();
    utils.install(&window).unwrap();

    let namespace = js_sys::Reflect::get(&window, &JsValue::from_str(NAMESPACE)).unwrap();
    for name in ["showNotification", "setLoading", "formatDate", "checkAuth", "config"] {
        let member = js_sys::Reflect::get(&namespace, &JsValue::from_str(name)).unwrap();
        assert!(member.is_function(), "{} missing", name);
    }

    let show: js_sys::Function = js_sys::Reflect::get(&window, &JsValue::from_str("showNotification"))
        .unwrap()
        .dyn_into()
        .unwrap();
    let before = count(&format!("[{}]", NOTIFICATION_ID_ATTRIBUTE));
    show.call1(&JsValue::NULL, &JsValue::from_str("From a page script")).unwrap();
    assert_eq!(count(&format!("[{}]", NOTIFICATION_ID_ATTRIBUTE)), before + 1);
}

#[wasm_bindgen_test]
fn test_config_is_resolved_once() {
    let first = Config::environment();
    let second = Config::environment();
    assert!(std::ptr::eq(first, second));
    assert!(!first.api_base.is_empty());
}

fn latest_notification() -> Element {
    let nodes = document()
        .query_selector_all(&format!("[{}]", NOTIFICATION_ID_ATTRIBUTE))
        .unwrap();
    nodes
        .item(nodes.length() - 1)
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn page_notify() -> js_sys::Function {
    let utils = Utils::from_window().unwrap();
    utils.install(&dom::window().unwrap()).unwrap();
    js_sys::Reflect::get(&dom::window().unwrap(), &JsValue::from_str("showNotification"))
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_page_script_severity_fallbacks() {
    let show = page_notify();
    let message = JsValue::from_str("x");

    show.call1(&JsValue::NULL, &message).unwrap();
    assert!(latest_notification().text_content().unwrap().contains('ℹ'));

    show.call2(&JsValue::NULL, &message, &JsValue::NULL).unwrap();
    let el = latest_notification();
    assert!(el.text_content().unwrap().contains('•'));
    assert!(el.class_name().contains("bg-gray-500"));

    show.call2(&JsValue::NULL, &message, &JsValue::from_str("INFO")).unwrap();
    assert!(latest_notification().text_content().unwrap().contains('•'));

    show.call2(&JsValue::NULL, &message, &JsValue::from_f64(1.0)).unwrap();
    assert!(latest_notification().text_content().unwrap().contains('•'));

    show.call2(&JsValue::NULL, &message, &JsValue::from_str("success")).unwrap();
    assert!(latest_notification().text_content().unwrap().contains('✓'));
}

#[wasm_bindgen_test]
fn test_js_values_render_like_template_literals() {
    assert_eq!(dom::js_to_text(&JsValue::UNDEFINED), "undefined");
    assert_eq!(dom::js_to_text(&JsValue::NULL), "null");
    assert_eq!(dom::js_to_text(&JsValue::from_f64(42.0)), "42");
    assert_eq!(dom::js_to_text(&JsValue::from_bool(true)), "true");
    assert_eq!(dom::js_to_text(&JsValue::from_str("plain")), "plain");

    page_notify().call0(&JsValue::NULL).unwrap();
    assert!(latest_notification().text_content().unwrap().contains("undefined"));
}

#[wasm_bindgen_test]
async fn test_startup_publishes_globals_before_idle_setup() {
    LocalStorage::delete(AUTH_FLAG_KEY);
    let window = dom::window().unwrap();
    js_sys::Reflect::delete_property(&window, &JsValue::from_str(NAMESPACE)).unwrap();
    let target = tagged_element("Wired at idle time");
    let tooltip_selector = format!("#{}", TOOLTIP_ID);

    careersafe_frontend::run_app().unwrap();

    // Published synchronously, before any deferred callback has run.
    let namespace = js_sys::Reflect::get(&window, &JsValue::from_str(NAMESPACE)).unwrap();
    assert!(namespace.is_object());

    // Tooltips are idle-time work and must not be wired yet.
    fire(&target, "mouseenter");
    assert_eq!(count(&tooltip_selector), 0);

    let mut attached = false;
    for _ in 0..60 {
        TimeoutFuture::new(50).await;
        fire(&target, "mouseenter");
        attached = count(&tooltip_selector) == 1;
        fire(&target, "mouseleave");
        if attached {
            break;
        }
    }
    assert!(attached, "tooltips never attached after idle");
    assert_eq!(count(&tooltip_selector), 0);
    target.remove();
}
