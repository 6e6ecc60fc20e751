use super::*;

#[test]
fn click_outside_any_toggle_is_ignored() {
    let decision = decide_toggle_click(None, None);
    assert_eq!(decision, ClickDecision::pass());
    assert!(!decision.toggle);
    assert!(!decision.prevent_default);
    assert!(!decision.stop_propagation);
}

#[test]
fn click_on_button_toggle_flips_without_suppressing_default() {
    let decision = decide_toggle_click(Some(ToggleHit { is_button: true }), None);
    assert!(decision.toggle);
    assert!(!decision.prevent_default);
    assert!(decision.stop_propagation);
}

#[test]
fn click_on_link_toggle_suppresses_default_navigation() {
    let decision = decide_toggle_click(Some(ToggleHit { is_button: false }), None);
    assert!(decision.toggle);
    assert!(decision.prevent_default);
    assert!(decision.stop_propagation);
}

#[test]
fn current_target_match_is_used_when_target_misses() {
    // Framework-delegated events may surface the match only on the listener's
    // current target.
    let decision = decide_toggle_click(None, Some(ToggleHit { is_button: true }));
    assert!(decision.toggle);
    assert!(!decision.prevent_default);
}

#[test]
fn target_match_takes_precedence_over_current_target() {
    let decision = decide_toggle_click(
        Some(ToggleHit { is_button: false }),
        Some(ToggleHit { is_button: true }),
    );
    assert!(decision.toggle);
    assert!(decision.prevent_default);
}
