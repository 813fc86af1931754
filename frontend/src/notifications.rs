use gloo_timers::callback::Timeout;
use log::{debug, warn};
use shared::notification::{Phase, Severity};
use shared::Result;
use uuid::Uuid;
use web_sys::{Document, HtmlElement};

use crate::dom;

/// Attribute carrying each notification's id.
pub const NOTIFICATION_ID_ATTRIBUTE: &str = "data-notification-id";

/// Creates transient, self-removing notifications in the top-right corner.
///
/// Every call is independent: the element is owned by its own timer chain
/// and nothing is shared between notifications.
#[derive(Clone, Debug)]
pub struct NotificationCenter {
    document: Document,
}

impl NotificationCenter {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        Ok(Self::new(dom::document()?))
    }

    /// Shows a notification. Never fails; environment problems are logged.
    pub fn notify(&self, message: &str, severity: Severity) {
        if let Err(e) = self.try_notify(message, severity) {
            warn!("Failed to show notification: {}", e);
        }
    }

    /// Shows a notification and returns its id.
    pub fn try_notify(&self, message: &str, severity: Severity) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let element = self.build(id, message, severity)?;

        dom::body(&self.document)?
            .append_child(&element)
            .map_err(dom::js_err)?;
        debug!("Notification {} shown ({:?})", id, severity);

        advance(id, element, Phase::Inserted);
        Ok(id)
    }

    fn build(&self, id: Uuid, message: &str, severity: Severity) -> Result<HtmlElement> {
        let notification = dom::create_html_element(&self.document, "div")?;
        notification.set_class_name(&severity.class_list());
        notification
            .set_attribute(NOTIFICATION_ID_ATTRIBUTE, &id.to_string())
            .map_err(dom::js_err)?;
        notification.set_attribute("role", "status").map_err(dom::js_err)?;

        let row = dom::create_element_with_text(&self.document, "div", "flex items-center gap-2", "")?;
        let icon = dom::create_element_with_text(&self.document, "span", "text-xl", severity.icon())?;
        // Text, not markup: messages can carry user input.
        let text = dom::create_element_with_text(&self.document, "span", "", message)?;

        row.append_child(&icon).map_err(dom::js_err)?;
        row.append_child(&text).map_err(dom::js_err)?;
        notification.append_child(&row).map_err(dom::js_err)?;
        Ok(notification)
    }
}

fn apply_phase(element: &HtmlElement, phase: Phase) {
    let style = element.style();
    for (property, value) in phase.styles() {
        if let Err(e) = style.set_property(property, value) {
            warn!("Failed to set {} on notification: {:?}", property, e);
        }
    }
}

/// Enters `phase`, then arms a timer for the next one. Each step is
/// chained off the previous, so the phases can never reorder. The timers
/// are detached: once inserted, a notification always reaches removal.
fn advance(id: Uuid, element: HtmlElement, phase: Phase) {
    if phase == Phase::Removed {
        element.remove();
        debug!("Notification {} removed", id);
        return;
    }

    apply_phase(&element, phase);
    if let Some((delay, next)) = phase.step() {
        Timeout::new(delay, move || advance(id, element, next)).forget();
    }
}
