//! Light/dark theme state machine.
//!
//! DESIGN
//! ======
//! Two states, one total transition. On load the saved preference wins; the
//! system dark-mode signal is only consulted when nothing usable was saved.
//! Each toggle re-renders through a [`ThemeSurface`] and then persists, so the
//! stored value always matches what is on screen.
//!
//! ERROR HANDLING
//! ==============
//! Storage and DOM failures are logged and swallowed. A failed write leaves the
//! new theme displayed for this page view only. A failed display update aborts
//! the toggle before anything is saved.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{ICON_MOON, ICON_SUN};
use crate::error::UiError;
use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an attribute or storage value; `None` for anything but `light`/`dark`.
    #[must_use]
    pub fn from_attribute(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button: the icon names the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => ICON_MOON,
            Self::Dark => ICON_SUN,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_attribute(s).ok_or_else(|| UiError::InvalidTheme(s.to_owned()))
    }
}

/// Resolve the initial theme from a saved value and the system signal.
///
/// `system_prefers_dark` is only called when `saved` is absent or unusable.
pub fn resolve(saved: Option<&str>, system_prefers_dark: impl FnOnce() -> bool) -> Theme {
    if let Some(raw) = saved {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => leptos::logging::warn!("{}: {err}; ignoring saved theme", err.error_code()),
        }
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

/// Where the active theme is displayed: the document attribute plus the toggle icon.
pub trait ThemeSurface {
    /// Theme currently shown, if the document carries a recognizable one.
    fn current(&self) -> Option<Theme>;

    /// Display `theme` (attribute and icon).
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] if the document rejects the update.
    fn show(&mut self, theme: Theme) -> Result<(), UiError>;
}

/// Owns the theme preference and keeps storage and surface in step.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Resolve the initial theme and display it. Runs once per page load.
    pub fn init(store: S, mut surface: D, key: &str, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        let saved = match store.load(key) {
            Ok(saved) => saved,
            Err(err) => {
                leptos::logging::warn!("{}: {err}", err.error_code());
                None
            }
        };
        let theme = resolve(saved.as_deref(), system_prefers_dark);
        if let Err(err) = surface.show(theme) {
            leptos::logging::warn!("{}: {err}", err.error_code());
        }
        Self {
            store,
            surface,
            key: key.to_owned(),
            theme,
        }
    }

    /// Flip the displayed theme and persist it. Returns the theme now shown.
    ///
    /// If the surface rejects the update nothing is saved and the current
    /// theme is returned unchanged.
    pub fn toggle(&mut self) -> Theme {
        let current = self.surface.current().unwrap_or(self.theme);
        let next = current.toggled();
        if let Err(err) = self.surface.show(next) {
            leptos::logging::warn!("{}: {err}; theme left as {current}", err.error_code());
            return current;
        }
        if let Err(err) = self.store.save(&self.key, next.as_str()) {
            leptos::logging::warn!("{}: {err}", err.error_code());
        }
        self.theme = next;
        next
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }
}
