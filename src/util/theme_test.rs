use super::*;

// =============================================================
// Theme parsing
// =============================================================

#[test]
fn parse_accepts_exactly_the_two_canonical_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_treats_unrecognized_values_as_absent() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("DARK"), None);
    assert_eq!(Theme::parse("auto"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(" dark"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

// =============================================================
// Flipping
// =============================================================

#[test]
fn flipped_is_an_involution() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn is_dark_only_for_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn stored_preference_wins_over_system_signal() {
    assert_eq!(resolve_theme(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve_theme(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn missing_preference_follows_system_signal() {
    assert_eq!(resolve_theme(None, true), Theme::Dark);
    assert_eq!(resolve_theme(None, false), Theme::Light);
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}
