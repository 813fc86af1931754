use serde::{Deserialize, Serialize};

/// Delay between insertion and the enter transition.
pub const ENTER_DELAY_MS: u32 = 10;

/// How long a notification stays on screen before it starts dismissing.
pub const DISPLAY_DURATION_MS: u32 = 3000;

/// Declared duration of the dismiss transition.
pub const DISMISS_TRANSITION_MS: u32 = 300;

/// Delay between the start of the dismiss transition and removal.
pub const REMOVE_DELAY_MS: u32 = DISMISS_TRANSITION_MS;

const _: () = assert!(REMOVE_DELAY_MS >= DISMISS_TRANSITION_MS);
const _: () = assert!(ENTER_DELAY_MS < 50);

/// Classes applied to every notification element.
pub const BASE_CLASSES: &str =
    "fixed top-4 right-4 z-50 p-4 rounded-lg shadow-lg notification transform transition-all text-white max-w-sm";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
    /// Anything not recognised; rendered with the neutral style.
    Other,
}

impl Severity {
    /// Total parse. Names match exactly; anything else, including other
    /// casings, maps to [`Severity::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Other,
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
            Severity::Info => "bg-blue-500",
            Severity::Other => "bg-gray-500",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
            Severity::Other => "•",
        }
    }

    pub fn class_list(&self) -> String {
        format!("{} {}", BASE_CLASSES, self.classes())
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse(name)
    }
}

/// Visual state of a notification element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Inserted,
    Shown,
    Dismissing,
    Removed,
}

impl Phase {
    /// Inline styles applied when entering this phase.
    pub fn styles(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Phase::Inserted => &[],
            Phase::Shown => &[("transform", "translateX(0)")],
            Phase::Dismissing => &[
                ("opacity", "0"),
                ("transform", "translateX(100%)"),
                ("transition", "opacity 0.3s, transform 0.3s"),
            ],
            Phase::Removed => &[],
        }
    }

    /// Milliseconds after creation at which this phase begins.
    pub fn starts_at(&self) -> u32 {
        match self {
            Phase::Inserted => 0,
            Phase::Shown => ENTER_DELAY_MS,
            Phase::Dismissing => DISPLAY_DURATION_MS,
            Phase::Removed => DISPLAY_DURATION_MS + REMOVE_DELAY_MS,
        }
    }

    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Inserted => Some(Phase::Shown),
            Phase::Shown => Some(Phase::Dismissing),
            Phase::Dismissing => Some(Phase::Removed),
            Phase::Removed => None,
        }
    }

    /// The following phase and the delay until it, for chaining timers.
    pub fn step(&self) -> Option<(u32, Phase)> {
        let next = self.next()?;
        Some((next.starts_at() - self.starts_at(), next))
    }
}

/// Upper bound on a notification's time in the document.
pub fn lifetime_ms() -> u32 {
    Phase::Removed.starts_at()
}
