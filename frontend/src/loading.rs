use log::warn;
use shared::Result;
use web_sys::Element;

use crate::dom;

pub const SPINNER_MARKUP: &str = r#"<div class="spinner"></div>"#;

/// Holds the element's content while the spinner is shown.
pub const SAVED_CONTENT_ATTRIBUTE: &str = "data-loading-content";

/// Toggles the loading state of a button-like element.
///
/// Entering the loading state disables the element and swaps its content
/// for a spinner; leaving it re-enables the element and puts the content back.
pub fn set_loading(element: &Element, is_loading: bool) {
    if let Err(e) = try_set_loading(element, is_loading) {
        warn!("Failed to toggle loading state: {}", e);
    }
}

fn try_set_loading(element: &Element, is_loading: bool) -> Result<()> {
    if is_loading {
        // Repeated calls must not save the spinner over the real content.
        if !element.has_attribute(SAVED_CONTENT_ATTRIBUTE) {
            element
                .set_attribute(SAVED_CONTENT_ATTRIBUTE, &element.inner_html())
                .map_err(dom::js_err)?;
        }
        element.set_attribute("disabled", "").map_err(dom::js_err)?;
        element.set_attribute("aria-busy", "true").map_err(dom::js_err)?;
        element.set_inner_html(SPINNER_MARKUP);
    } else {
        element.remove_attribute("disabled").map_err(dom::js_err)?;
        element.remove_attribute("aria-busy").map_err(dom::js_err)?;
        if let Some(saved) = element.get_attribute(SAVED_CONTENT_ATTRIBUTE) {
            element.set_inner_html(&saved);
            element
                .remove_attribute(SAVED_CONTENT_ATTRIBUTE)
                .map_err(dom::js_err)?;
        }
    }
    Ok(())
}
