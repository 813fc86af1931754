use shared::{Result, UiError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(UiError::NoBody)
}

/// Converts a thrown JS value into a [`UiError`].
pub fn js_err(value: JsValue) -> UiError {
    UiError::js(js_to_text(&value))
}

pub fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::CreateElement(tag.to_string()))
}

pub fn create_element_with_text(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element> {
    let el = document
        .create_element(tag)
        .map_err(|_| UiError::CreateElement(tag.to_string()))?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

/// String form of an arbitrary JS value, the way template literals render it.
pub fn js_to_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    js_sys::Object::from(value.clone()).to_string().into()
}
