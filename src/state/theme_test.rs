use super::*;

#[test]
fn default_active_theme_is_light() {
    let state = ThemeState::default();
    assert_eq!(state.active, Theme::Light);
}

#[test]
fn new_carries_the_given_theme() {
    assert_eq!(ThemeState::new(Theme::Dark).active, Theme::Dark);
}
