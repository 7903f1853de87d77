//! Error taxonomy for the page controllers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is shown to the user. Every error is logged to the console
//! and the interaction that raised it is dropped; the page keeps working.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("action card is missing `{field}`")]
    MissingCardField { field: &'static str },
    #[error("unrecognized theme value: {0:?}")]
    InvalidTheme(String),
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl UiError {
    /// Stable code for log filtering.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCardField { .. } => "E_CARD_FIELD",
            Self::InvalidTheme(_) => "E_THEME_VALUE",
            Self::Config(_) => "E_CONFIG",
            Self::Storage(_) => "E_STORAGE",
            Self::Dom(_) => "E_DOM",
        }
    }
}

#[cfg(feature = "csr")]
impl UiError {
    /// Wrap a JS exception raised by a DOM call.
    pub(crate) fn dom(context: &str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{context}: {err:?}"))
    }

    /// Wrap a JS exception raised by `localStorage`.
    pub(crate) fn storage(context: &str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(format!("{context}: {err:?}"))
    }
}
