//! Page configuration: which host-page names the controllers bind to.
//!
//! DESIGN
//! ======
//! Defaults match the generated leaderboard markup. A page can override any
//! subset by embedding `<script type="application/json" id="ui-config">`;
//! keys it omits keep their defaults, misspelled keys reject the whole block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{ACTION_CARD_CLASS, CARD_HOVER_OPACITY, THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Marker class identifying action cards.
    pub action_card_class: String,
    /// Id of the theme toggle button. The theme controller stays inert without it.
    pub theme_toggle_id: String,
    /// Attribute on `<html>` carrying the active theme.
    pub theme_attribute: String,
    /// `localStorage` key for the saved theme.
    pub theme_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            action_card_class: ACTION_CARD_CLASS.to_owned(),
            theme_toggle_id: THEME_TOGGLE_ID.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if `raw` is not a JSON object, names an
    /// unknown key, or gives a key a non-string value.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// CSS selector matching action cards.
    #[must_use]
    pub fn card_selector(&self) -> String {
        format!(".{}", self.action_card_class)
    }

    /// Stylesheet text giving action cards a pointer cursor and hover dimming.
    #[must_use]
    pub fn card_style(&self) -> String {
        let sel = self.card_selector();
        format!("{sel} {{ cursor: pointer; transition: opacity 0.2s; }} {sel}:hover {{ opacity: {CARD_HOVER_OPACITY}; }}")
    }
}

/// Load the page's configuration, falling back to defaults.
pub fn load() -> UiConfig {
    #[cfg(feature = "csr")]
    {
        use crate::consts::CONFIG_SCRIPT_ID;

        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content())
        else {
            return UiConfig::default();
        };
        match UiConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("{}: {err}; using defaults", err.error_code());
                UiConfig::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        UiConfig::default()
    }
}
