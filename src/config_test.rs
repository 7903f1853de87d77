use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_generated_markup() {
    let config = UiConfig::default();
    assert_eq!(config.action_card_class, "action-card");
    assert_eq!(config.theme_toggle_id, "themeToggle");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.theme_storage_key, "theme");
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_is_default() {
    assert_eq!(load(), UiConfig::default());
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_keeps_defaults() {
    let config = UiConfig::from_json("{}").unwrap();
    assert_eq!(config, UiConfig::default());
}

#[test]
fn partial_override_changes_only_named_keys() {
    let config = UiConfig::from_json(r#"{"theme_storage_key":"lb-theme"}"#).unwrap();
    assert_eq!(config.theme_storage_key, "lb-theme");
    assert_eq!(config.action_card_class, "action-card");
    assert_eq!(config.theme_toggle_id, "themeToggle");
}

#[test]
fn malformed_json_is_config_error() {
    let err = UiConfig::from_json("{\"theme_storage_key\":").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn wrong_value_type_is_config_error() {
    let err = UiConfig::from_json(r#"{"action_card_class": 3}"#).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn unknown_key_is_config_error() {
    let err = UiConfig::from_json(r#"{"theme_key":"x"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

// =============================================================
// Card styling
// =============================================================

#[test]
fn card_selector_is_class_selector() {
    assert_eq!(UiConfig::default().card_selector(), ".action-card");
}

#[test]
fn card_style_targets_configured_class() {
    let config = UiConfig::from_json(r#"{"action_card_class":"feed-item"}"#).unwrap();
    let style = config.card_style();
    assert!(style.contains(".feed-item { cursor: pointer;"));
    assert!(style.contains(".feed-item:hover { opacity: 0.8; }"));
    assert!(!style.contains("action-card"));
}
