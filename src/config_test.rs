use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_markup() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.root, RootTarget::Body);
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.icon_selector, "i");
    assert_eq!(config.light_icon_class, "fa-sun");
    assert_eq!(config.dark_icon_class, "fa-moon");
    assert_eq!(config.level().unwrap(), log::Level::Info);
}

#[test]
fn default_config_is_valid() {
    assert!(ThemeConfig::default().validate().is_ok());
}

// =============================================================
// JSON loading
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn partial_object_overrides_named_fields() {
    let config = ThemeConfig::from_json(
        r#"{"root":"document","storage_key":"site-theme","log_level":"debug"}"#,
    )
    .unwrap();
    assert_eq!(config.root, RootTarget::Document);
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.level().unwrap(), log::Level::Debug);
    assert_eq!(config.toggle_id, "theme-toggle");
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(ThemeConfig::from_json("{"), Err(ThemeError::Config(_))));
}

#[test]
fn unknown_field_is_config_error() {
    assert!(matches!(
        ThemeConfig::from_json(r#"{"storage":"theme"}"#),
        Err(ThemeError::Config(_))
    ));
}

#[test]
fn unknown_root_target_is_config_error() {
    assert!(matches!(
        ThemeConfig::from_json(r#"{"root":"head"}"#),
        Err(ThemeError::Config(_))
    ));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_storage_key_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(ref msg) if msg.contains("storage_key")));
}

#[test]
fn whitespace_in_marker_class_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"dark_icon_class":"fa moon"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(ref msg) if msg.contains("dark_icon_class")));
}

#[test]
fn identical_marker_classes_are_rejected() {
    let err = ThemeConfig::from_json(r#"{"light_icon_class":"fa-moon"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = ThemeConfig::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(ref msg) if msg.contains("log_level")));
}

#[test]
fn log_level_is_case_insensitive() {
    let config = ThemeConfig::from_json(r#"{"log_level":"WARN"}"#).unwrap();
    assert_eq!(config.level().unwrap(), log::Level::Warn);
}
