//! Default DOM names, storage keys, and presentation constants.

// ── Modal markup ────────────────────────────────────────────────

/// Id of the modal backdrop element (the dimmed overlay).
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_DETAILS_ID: &str = "modal-details";
pub const MODAL_USER_ID: &str = "modal-user";
pub const MODAL_SCORE_ID: &str = "modal-score";
pub const MODAL_TIME_ID: &str = "modal-time";

/// Class of the close control inside the modal.
pub const CLOSE_CLASS: &str = "close";

// ── Action cards ────────────────────────────────────────────────

/// Marker class carried by every clickable action card.
pub const ACTION_CARD_CLASS: &str = "action-card";

/// Data attributes read off an action card, in `open` argument order.
pub const ATTR_SUMMARY: &str = "data-summary";
pub const ATTR_USER: &str = "data-user";
pub const ATTR_SCORE: &str = "data-score";
pub const ATTR_TIME: &str = "data-time";

/// Opacity applied to an action card under the pointer.
pub const CARD_HOVER_OPACITY: f64 = 0.8;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `light` or `dark`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on `<html>` to select the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the optional theme toggle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Media query answering "does the host prefer dark?".
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Icon shown while dark is active (click to go light).
pub const ICON_SUN: &str = "fas fa-sun";
/// Icon shown while light is active (click to go dark).
pub const ICON_MOON: &str = "fas fa-moon";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional JSON `<script>` block holding [`crate::config::UiConfig`] overrides.
pub const CONFIG_SCRIPT_ID: &str = "ui-config";
