/// Attribute whose value is the literal tooltip text.
pub const TOOLTIP_ATTRIBUTE: &str = "data-tooltip";

/// Reserved element id of the live tooltip.
pub const TOOLTIP_ID: &str = "tooltip";

pub const TOOLTIP_CLASSES: &str = "absolute bg-gray-900 text-white text-xs rounded py-1 px-2 z-50";

/// Vertical gap between the tooltip's top edge and the target's top edge.
pub const TOOLTIP_OFFSET_PX: f64 = 30.0;

/// Bounding box of the hovered element, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }
}

/// Places the tooltip above the target, centred on it.
pub fn place_above(target: Rect, tooltip_width: f64) -> Placement {
    Placement {
        top: target.top - TOOLTIP_OFFSET_PX,
        left: target.left + target.width / 2.0 - tooltip_width / 2.0,
    }
}
