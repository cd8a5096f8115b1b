use super::*;

// =============================================================
// Transition
// =============================================================

#[test]
fn after_light_is_dark() {
    assert_eq!(Theme::after(Some("light")), Theme::Dark);
}

#[test]
fn after_dark_is_light() {
    assert_eq!(Theme::after(Some("dark")), Theme::Light);
}

#[test]
fn after_unset_is_light() {
    assert_eq!(Theme::after(None), Theme::Light);
    assert_eq!(Theme::after(Some("")), Theme::Light);
}

#[test]
fn after_unrecognized_value_is_light() {
    assert_eq!(Theme::after(Some("purple")), Theme::Light);
    assert_eq!(Theme::after(Some("Light")), Theme::Light);
    assert_eq!(Theme::after(Some(" light")), Theme::Light);
}

#[test]
fn next_flips_between_variants() {
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::Light);
    assert_eq!(Theme::Dark.next().next(), Theme::Dark);
}

#[test]
fn after_agrees_with_next_for_known_values() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::after(Some(theme.as_str())), theme.next());
    }
}

// =============================================================
// Parsing and formatting
// =============================================================

#[test]
fn parses_exact_lowercase_names() {
    assert_eq!("light".parse::<Theme>().ok(), Some(Theme::Light));
    assert_eq!("dark".parse::<Theme>().ok(), Some(Theme::Dark));
}

#[test]
fn rejects_other_spellings() {
    for raw in ["", "DARK", "purple", "light "] {
        let err = raw.parse::<Theme>().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidTheme(ref v) if v == raw));
    }
}

#[test]
fn display_matches_storage_spelling() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let theme: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(theme, Theme::Light);
}

#[test]
fn shown_for_maps_non_light_values_to_dark() {
    assert_eq!(Theme::shown_for("light"), Theme::Light);
    assert_eq!(Theme::shown_for("dark"), Theme::Dark);
    assert_eq!(Theme::shown_for("purple"), Theme::Dark);
}

#[test]
fn from_attribute_recognizes_only_exact_names() {
    assert_eq!(Theme::from_attribute("light"), Some(Theme::Light));
    assert_eq!(Theme::from_attribute("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_attribute(""), None);
    assert_eq!(Theme::from_attribute("purple"), None);
}
