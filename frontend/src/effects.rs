use shared::effects::{stagger_delay, FADE_UP_CLASS};
use shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

/// Staggers the entrance animation of every `.fade-up` element.
/// Returns how many elements were staggered.
pub fn stagger_fade_ups(document: &Document) -> Result<u32> {
    let nodes = document
        .query_selector_all(&format!(".{}", FADE_UP_CLASS))
        .map_err(dom::js_err)?;

    let mut count = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            el.style()
                .set_property("animation-delay", &stagger_delay(i as usize))
                .map_err(dom::js_err)?;
            count += 1;
        }
    }
    Ok(count)
}
