/// Class marking elements that animate in on load.
pub const FADE_UP_CLASS: &str = "fade-up";

/// Seconds between consecutive fade-up animations.
pub const FADE_UP_STEP_SECS: f64 = 0.15;

/// CSS `animation-delay` for the fade-up element at `index`.
pub fn stagger_delay(index: usize) -> String {
    let secs = index as f64 * FADE_UP_STEP_SECS;
    // Round away float noise like 0.44999999999999996.
    let secs = (secs * 1000.0).round() / 1000.0;
    format!("{}s", secs)
}
