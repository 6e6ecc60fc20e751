//! Theme value type and pure resolution rules.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of the persisted preference and the system
//! dark-mode signal so it can be tested without any browser environment.
//! Everything that touches the DOM lives in `theme_controller` and
//! `browser_theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme for the site chrome. Exactly two variants exist; anything
/// else found in storage is treated as "no preference".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Canonical storage/attribute spelling (`"light"` / `"dark"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unrecognized input is `None`, never an error:
    /// a stale or corrupted slot must behave exactly like an empty one.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// What should be showing given the two inputs: an explicit preference wins,
/// otherwise the system signal picks dark or light.
#[must_use]
pub fn resolve_theme(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}
