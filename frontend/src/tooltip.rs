use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, warn};
use shared::tooltip::{place_above, Rect, TOOLTIP_ATTRIBUTE, TOOLTIP_CLASSES, TOOLTIP_ID};
use shared::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

/// Hover labels for elements carrying `data-tooltip`.
///
/// At most one tooltip is live at a time. The slot is an owned handle that
/// is always cleared before a new tooltip is created.
#[derive(Clone)]
pub struct TooltipController {
    document: Document,
    slot: Rc<RefCell<Option<HtmlElement>>>,
}

/// Listeners installed by [`TooltipController::attach`]. Dropping this
/// detaches them.
pub struct TooltipBindings {
    listeners: Vec<EventListener>,
}

impl TooltipBindings {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keeps the listeners for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

impl TooltipController {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Wires every element that currently carries the tooltip attribute.
    /// Elements added later are not covered unless this runs again.
    pub fn attach(&self) -> Result<TooltipBindings> {
        let selector = format!("[{}]", TOOLTIP_ATTRIBUTE);
        let nodes = self
            .document
            .query_selector_all(&selector)
            .map_err(dom::js_err)?;

        let mut listeners = Vec::with_capacity(nodes.length() as usize * 2);
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };

            let controller = self.clone();
            let target = element.clone();
            listeners.push(EventListener::new(&element, "mouseenter", move |_| {
                if let Err(e) = controller.show(&target) {
                    warn!("Failed to show tooltip: {}", e);
                }
            }));

            let controller = self.clone();
            listeners.push(EventListener::new(&element, "mouseleave", move |_| {
                controller.hide();
            }));
        }

        debug!("Tooltips attached to {} elements", listeners.len() / 2);
        Ok(TooltipBindings { listeners })
    }

    pub fn show(&self, target: &Element) -> Result<()> {
        self.hide();

        let text = target.get_attribute(TOOLTIP_ATTRIBUTE).unwrap_or_default();
        let tooltip = dom::create_html_element(&self.document, "div")?;
        tooltip.set_class_name(TOOLTIP_CLASSES);
        tooltip.set_text_content(Some(&text));
        tooltip.set_id(TOOLTIP_ID);
        dom::body(&self.document)?
            .append_child(&tooltip)
            .map_err(dom::js_err)?;

        // Width is only known once the tooltip is in the document.
        let bounds = target.get_bounding_client_rect();
        let rect = Rect {
            top: bounds.top(),
            left: bounds.left(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let placement = place_above(rect, f64::from(tooltip.offset_width()));
        let style = tooltip.style();
        style.set_property("top", &placement.top_px()).map_err(dom::js_err)?;
        style.set_property("left", &placement.left_px()).map_err(dom::js_err)?;

        *self.slot.borrow_mut() = Some(tooltip);
        Ok(())
    }

    /// Removes the live tooltip, if any.
    pub fn hide(&self) {
        if let Some(tooltip) = self.slot.borrow_mut().take() {
            tooltip.remove();
        }
        // Strays with the reserved id, e.g. from page scripts.
        while let Some(stray) = self.document.get_element_by_id(TOOLTIP_ID) {
            stray.remove();
        }
    }

    pub fn is_shown(&self) -> bool {
        self.slot.borrow().is_some()
    }
}
