//! Pure decision logic for the document-level toggle click handler.
//!
//! DESIGN
//! ======
//! The browser wiring in `browser_theme` only gathers facts about the click
//! (is the element on or inside a toggle control, is that control a native
//! button); what to do with those facts is decided here so the delegation
//! rules stay testable without events or a DOM.

#[cfg(test)]
#[path = "toggle_click_test.rs"]
mod toggle_click_test;

/// Facts about a clicked element's relationship to a toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleHit {
    /// The nearest matching toggle control is a native `<button>`.
    pub is_button: bool,
}

/// What the host should do with a document-level click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickDecision {
    /// Flip the theme.
    pub toggle: bool,
    /// Suppress the element's default action (e.g. link navigation).
    pub prevent_default: bool,
    /// Stop the click from propagating further.
    pub stop_propagation: bool,
}

impl ClickDecision {
    /// Leave the click alone entirely.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }
}

/// Classify a click given the nearest-toggle match for the event target and,
/// as a fallback, for the listener's current target. Host frameworks with
/// synthetic delegation can re-target events, so both checks are kept.
///
/// A hit always toggles and stops propagation; default is suppressed only
/// when the control is not a native button, which handles its own
/// activation semantics.
#[must_use]
pub fn decide_toggle_click(
    target_hit: Option<ToggleHit>,
    current_target_hit: Option<ToggleHit>,
) -> ClickDecision {
    let Some(hit) = target_hit.or(current_target_hit) else {
        return ClickDecision::pass();
    };
    ClickDecision {
        toggle: true,
        prevent_default: !hit.is_button,
        stop_propagation: true,
    }
}
