//! Theme controller: the single owner of the active visual theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller synchronizes three sources of truth (the persisted user
//! preference, the operating system's dark-mode signal, and the current
//! document reflection) and reacts to toggles, route swaps, and system
//! scheme changes. It is generic over a [`ThemeHost`] capability so the
//! same logic runs against the real browser adapter (`browser_theme`) and
//! an in-memory fake in tests.
//!
//! Every DOM-facing mutation goes through [`ThemeController::apply_theme_class`],
//! which keeps the root marker and all toggle pressed-states consistent with
//! one theme value.

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use crate::util::theme::{Theme, resolve_theme};

/// Host capabilities the controller needs: preference storage, the system
/// scheme signal, and the document reflection primitives.
///
/// Storage access is best-effort by contract: a disabled or throwing backend
/// must surface as `None` on read and as a dropped write, never as a panic
/// or error the controller has to handle.
pub trait ThemeHost {
    /// Read the persisted preference; unrecognized or unreadable values are
    /// `None`.
    fn stored_preference(&self) -> Option<Theme>;
    /// Persist an explicit preference (best effort).
    fn store_preference(&mut self, theme: Theme);
    /// Current `prefers-color-scheme: dark` result.
    fn system_prefers_dark(&self) -> bool;
    /// Whether the document root currently carries the dark marker.
    fn root_is_dark(&self) -> bool;
    /// Set the root dark marker and the descriptive theme attribute.
    fn set_root_theme(&mut self, theme: Theme);
    /// Sweep every toggle control's pressed attribute.
    fn set_toggles_pressed(&mut self, pressed: bool);
    /// Announce an explicit theme change to the rest of the page.
    fn announce_theme_change(&mut self, theme: Theme);
}

/// Owns theme resolution and keeps the host document in sync.
pub struct ThemeController<H: ThemeHost> {
    host: H,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Wrap a host without touching it. Use [`ThemeController::mount`] for
    /// the page-load path that applies the initial theme.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Construct and immediately apply the resolved theme, persisting it if
    /// no preference was stored. This is the first step of the init
    /// protocol and runs before any listener is attached, so the first
    /// paint never shows the wrong theme.
    pub fn mount(host: H) -> Self {
        let mut controller = Self::new(host);
        controller.ensure_theme_applied(true);
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// What should be showing: the persisted preference if present, else
    /// dark when the system signal says so, else light. No side effects.
    pub fn resolve_theme(&self) -> Theme {
        resolve_theme(self.host.stored_preference(), self.host.system_prefers_dark())
    }

    /// What is visually showing right now, read from the document
    /// reflection rather than storage.
    pub fn active_theme(&self) -> Theme {
        if self.host.root_is_dark() { Theme::Dark } else { Theme::Light }
    }

    /// The sole mutation primitive: root marker, theme attribute, and every
    /// toggle's pressed state move together.
    pub fn apply_theme_class(&mut self, theme: Theme) {
        self.host.set_root_theme(theme);
        self.host.set_toggles_pressed(theme.is_dark());
    }

    /// Apply the stored preference, or the resolved fallback when nothing
    /// is stored. The fallback is persisted only on request, so
    /// reapplication paths (route swaps, system changes) never write.
    ///
    /// Idempotent: a second call with unchanged inputs produces the same
    /// document state and issues no storage writes.
    pub fn ensure_theme_applied(&mut self, persist_if_missing: bool) {
        let stored = self.host.stored_preference();
        let theme = stored.unwrap_or_else(|| self.resolve_theme());
        self.apply_theme_class(theme);
        if stored.is_none() && persist_if_missing {
            self.host.store_preference(theme);
        }
    }

    /// Flip the active theme, persist the choice unconditionally, and
    /// announce it. Returns the new theme for callers that mirror it into
    /// reactive state.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.active_theme().flipped();
        self.apply_theme_class(next);
        self.host.store_preference(next);
        self.host.announce_theme_change(next);
        next
    }

    /// Re-sweep toggle pressed-states from the current document reflection.
    /// Needed after route swaps, when the control elements themselves may
    /// have been replaced.
    pub fn refresh_toggles(&mut self) {
        let pressed = self.active_theme().is_dark();
        self.host.set_toggles_pressed(pressed);
    }

    /// Reapply before the host framework swaps page content.
    pub fn before_swap(&mut self) {
        self.ensure_theme_applied(false);
    }

    /// Reapply after a swap and refresh the (possibly replaced) toggles.
    pub fn after_swap(&mut self) {
        self.ensure_theme_applied(false);
        self.refresh_toggles();
    }

    /// React to a system scheme change. An explicit persisted preference
    /// always overrides the system, so this is a no-op once one exists.
    pub fn on_system_scheme_change(&mut self) {
        if self.host.stored_preference().is_none() {
            self.ensure_theme_applied(false);
        }
    }
}
