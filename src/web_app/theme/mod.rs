// web_app/theme/mod.rs - Light/dark theme
//
// The store itself (store.rs) is plain Rust and owns no browser handles:
// persistence goes through `ThemeStorage` and visual side effects through
// `ThemeDocument`. The browser implementations live in browser.rs and the
// Leptos wiring (provider, context, toggle button) in provider.rs.

pub mod document;
pub mod storage;
pub mod store;
pub mod tokens;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod provider;

pub use document::{NoopDocument, ThemeDocument};
pub use storage::{MemoryStorage, ThemeStorage};
pub use store::{SubscriptionId, ThemeStore};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use provider::{use_theme, ThemeContext, ThemeProvider, ThemeToggle};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the last applied theme ("light" or "dark")
pub const THEME_KEY: &str = "theme";
/// Storage key holding whether the theme follows the OS ("true" or "false")
pub const SYSTEM_THEME_KEY: &str = "system-theme";
/// Name of the notification broadcast after every theme change
pub const THEME_CHANGE_EVENT: &str = "themeChange";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Exact, case-sensitive parse of a persisted value
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of `<meta name="theme-color">` for mobile browsers
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => "#FFFFFF",
            Theme::Dark => "#000000",
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the effective theme comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    /// The user picked a theme; OS changes are ignored
    Explicit(Theme),
    /// Mirror the OS `prefers-color-scheme` setting
    #[default]
    FollowingSystem,
}

impl ThemePreference {
    /// Preference recorded by a previous visit
    ///
    /// Only a valid theme together with `system-theme == "false"` counts as
    /// an explicit choice. Anything else, including a saved theme without
    /// the flag, follows the system.
    pub fn from_persisted(theme: Option<&str>, system_theme: Option<&str>) -> ThemePreference {
        match (theme.and_then(Theme::parse), system_theme) {
            (Some(theme), Some("false")) => ThemePreference::Explicit(theme),
            _ => ThemePreference::FollowingSystem,
        }
    }

    pub fn is_system(self) -> bool {
        matches!(self, ThemePreference::FollowingSystem)
    }
}

pub fn resolve(preference: ThemePreference, system_theme: Theme) -> Theme {
    match preference {
        ThemePreference::Explicit(theme) => theme,
        ThemePreference::FollowingSystem => system_theme,
    }
}

/// Failure while persisting the theme or touching the document
///
/// None of these are fatal: the store logs them and keeps its in-memory state.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme storage is unavailable")]
    StorageUnavailable,

    #[error("failed to {action} storage key `{key}`: {reason}")]
    Storage {
        action: &'static str,
        key: String,
        reason: String,
    },

    #[error("document is unavailable")]
    DocumentUnavailable,

    #[error("failed to update document: {0}")]
    Document(String),
}
