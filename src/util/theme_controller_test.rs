use super::*;

/// In-memory host: a raw storage slot (parsed on read like the browser
/// adapter), a system signal, and a fake document with N toggle controls.
struct FakeHost {
    slot: Option<String>,
    system_dark: bool,
    root_dark: bool,
    root_attr: Option<String>,
    toggles: Vec<bool>,
    writes: Vec<String>,
    announced: Vec<Theme>,
}

impl FakeHost {
    fn new(slot: Option<&str>, system_dark: bool) -> Self {
        Self {
            slot: slot.map(str::to_owned),
            system_dark,
            root_dark: false,
            root_attr: None,
            toggles: vec![false, false],
            writes: Vec::new(),
            announced: Vec::new(),
        }
    }

    /// Simulate a route swap replacing the toggle controls with fresh,
    /// unpressed elements.
    fn replace_toggles(&mut self, count: usize) {
        self.toggles = vec![false; count];
    }

    fn snapshot(&self) -> (bool, Option<String>, Vec<bool>) {
        (self.root_dark, self.root_attr.clone(), self.toggles.clone())
    }
}

impl ThemeHost for FakeHost {
    fn stored_preference(&self) -> Option<Theme> {
        self.slot.as_deref().and_then(Theme::parse)
    }

    fn store_preference(&mut self, theme: Theme) {
        self.slot = Some(theme.as_str().to_owned());
        self.writes.push(theme.as_str().to_owned());
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }

    fn root_is_dark(&self) -> bool {
        self.root_dark
    }

    fn set_root_theme(&mut self, theme: Theme) {
        self.root_dark = theme.is_dark();
        self.root_attr = Some(theme.as_str().to_owned());
    }

    fn set_toggles_pressed(&mut self, pressed: bool) {
        for toggle in &mut self.toggles {
            *toggle = pressed;
        }
    }

    fn announce_theme_change(&mut self, theme: Theme) {
        self.announced.push(theme);
    }
}

// =============================================================
// Resolution through the host
// =============================================================

#[test]
fn resolve_prefers_stored_value_over_system_signal() {
    let controller = ThemeController::new(FakeHost::new(Some("light"), true));
    assert_eq!(controller.resolve_theme(), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_signal_without_stored_value() {
    let controller = ThemeController::new(FakeHost::new(None, true));
    assert_eq!(controller.resolve_theme(), Theme::Dark);

    let controller = ThemeController::new(FakeHost::new(None, false));
    assert_eq!(controller.resolve_theme(), Theme::Light);
}

#[test]
fn unrecognized_stored_values_resolve_as_if_absent() {
    for junk in ["", "Dark", "auto", "system", "true", "0"] {
        let controller = ThemeController::new(FakeHost::new(Some(junk), true));
        assert_eq!(controller.resolve_theme(), Theme::Dark, "slot = {junk:?}");
    }
}

// =============================================================
// Mount / first apply
// =============================================================

#[test]
fn mount_without_preference_applies_and_persists_system_dark() {
    let controller = ThemeController::mount(FakeHost::new(None, true));
    let host = controller.host();
    assert!(host.root_dark);
    assert_eq!(host.root_attr.as_deref(), Some("dark"));
    assert_eq!(host.toggles, vec![true, true]);
    assert_eq!(host.writes, vec!["dark".to_owned()]);
}

#[test]
fn mount_with_stored_light_ignores_dark_system_and_does_not_rewrite() {
    let controller = ThemeController::mount(FakeHost::new(Some("light"), true));
    let host = controller.host();
    assert!(!host.root_dark);
    assert_eq!(host.root_attr.as_deref(), Some("light"));
    assert_eq!(host.toggles, vec![false, false]);
    assert!(host.writes.is_empty());
    assert_eq!(host.slot.as_deref(), Some("light"));
}

#[test]
fn mount_does_not_announce_a_change() {
    let controller = ThemeController::mount(FakeHost::new(None, true));
    assert!(controller.host().announced.is_empty());
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn ensure_theme_applied_twice_is_idempotent_and_write_free() {
    let mut controller = ThemeController::mount(FakeHost::new(Some("dark"), false));
    controller.ensure_theme_applied(false);
    let first = controller.host().snapshot();
    let writes_after_first = controller.host().writes.len();

    controller.ensure_theme_applied(false);
    assert_eq!(controller.host().snapshot(), first);
    assert_eq!(controller.host().writes.len(), writes_after_first);
    assert_eq!(writes_after_first, 0);
}

#[test]
fn ensure_without_persist_never_writes_even_when_slot_is_empty() {
    let mut controller = ThemeController::new(FakeHost::new(None, true));
    controller.ensure_theme_applied(false);
    controller.ensure_theme_applied(false);
    assert!(controller.host().writes.is_empty());
    assert!(controller.host().root_dark);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_document_state_and_persists_unconditionally() {
    let mut controller = ThemeController::mount(FakeHost::new(Some("light"), false));
    let next = controller.toggle_theme();
    assert_eq!(next, Theme::Dark);
    assert!(controller.host().root_dark);
    assert_eq!(controller.host().toggles, vec![true, true]);
    assert_eq!(controller.host().slot.as_deref(), Some("dark"));
    assert_eq!(controller.host().announced, vec![Theme::Dark]);
}

#[test]
fn toggle_twice_is_an_involution_on_document_state() {
    let mut controller = ThemeController::mount(FakeHost::new(Some("light"), true));
    let before = controller.host().snapshot();

    controller.toggle_theme();
    controller.toggle_theme();

    assert_eq!(controller.host().snapshot(), before);
    assert_eq!(controller.host().writes, vec!["dark".to_owned(), "light".to_owned()]);
    assert_eq!(controller.host().slot.as_deref(), Some("light"));
}

#[test]
fn toggle_reads_the_document_not_storage() {
    // Storage says light, but the document already shows dark; the flip
    // must go from what is visible.
    let mut host = FakeHost::new(Some("light"), false);
    host.root_dark = true;
    let mut controller = ThemeController::new(host);
    assert_eq!(controller.toggle_theme(), Theme::Light);
}

// =============================================================
// System scheme changes
// =============================================================

#[test]
fn system_change_reapplies_when_no_preference_is_stored() {
    let mut controller = ThemeController::mount(FakeHost::new(None, false));
    // mount persisted the resolved fallback, clear it to model a first
    // visit where persistence was unavailable
    controller.host_mut_for_test(|host| {
        host.slot = None;
        host.system_dark = true;
    });
    controller.on_system_scheme_change();
    assert!(controller.host().root_is_dark());
}

#[test]
fn system_change_is_ignored_after_an_explicit_toggle() {
    let mut controller = ThemeController::mount(FakeHost::new(None, false));
    controller.toggle_theme(); // explicit: dark, persisted
    controller.host_mut_for_test(|host| host.system_dark = false);
    controller.on_system_scheme_change();
    assert!(controller.host().root_dark);
}

// =============================================================
// Route swaps
// =============================================================

#[test]
fn after_swap_refreshes_replaced_toggle_controls() {
    let mut controller = ThemeController::mount(FakeHost::new(Some("dark"), false));
    controller.host_mut_for_test(|host| host.replace_toggles(3));

    controller.after_swap();
    assert_eq!(controller.host().toggles, vec![true, true, true]);
    assert!(controller.host().writes.is_empty());
}

#[test]
fn before_swap_reapplies_without_persisting() {
    let mut controller = ThemeController::new(FakeHost::new(None, true));
    controller.before_swap();
    assert!(controller.host().root_dark);
    assert!(controller.host().writes.is_empty());
}

impl ThemeController<FakeHost> {
    fn host_mut_for_test(&mut self, mutate: impl FnOnce(&mut FakeHost)) {
        mutate(&mut self.host);
    }
}
