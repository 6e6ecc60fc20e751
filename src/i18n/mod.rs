//! Interface-string lookup for the site.
//!
//! DESIGN
//! ======
//! A single supported locale keeps the dictionary a static, fully typed
//! structure: each feature is a struct of `&'static str` fields, so a
//! missing key is a compile error rather than a runtime fallback chain.
//! [`ui`] still takes a [`Language`] so call sites stay locale-aware; any
//! unsupported language resolves to the default dictionary.


pub mod ui;

pub use ui::UiStrings;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
}

/// The locale used when a requested language has no dictionary.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    /// BCP 47 primary subtag (`"en"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }

    /// Human-readable language name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::En => "English",
        }
    }

    /// Flag identifier used by the language picker.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "us",
        }
    }
}

/// Dictionary for `lang`, falling back to [`DEFAULT_LANGUAGE`]. Total: every
/// language resolves to some dictionary.
#[must_use]
pub fn ui(lang: Language) -> &'static UiStrings {
    match lang {
        Language::En => &ui::EN,
    }
}
