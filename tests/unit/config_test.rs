//! Unit tests for config module

use ansifence::{Background, Config, Foreground};

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(
        config.editor.placeholder,
        "Welcome to Discord Colored Text Generator!"
    );
    assert_eq!(
        config.editor.session_file,
        "~/.local/share/ansifence/session.json"
    );
    assert_eq!(config.palette.text_color, Foreground::Gray);
    assert_eq!(config.palette.background_color, Background::FireflyDarkBlue);
    assert!(config.export.reset_after_export);
    assert!(!config.export.copy_to_clipboard);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn palette_config_parses_names() {
    let toml_str = r#"
[palette]
text_color = "cyan"
background_color = "indigo"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.palette.text_color, Foreground::Cyan);
    assert_eq!(config.palette.background_color, Background::Indigo);
}

#[test]
fn palette_config_rejects_unknown_color() {
    let toml_str = r#"
[palette]
text_color = "orange"
"#;
    let err = toml::from_str::<Config>(toml_str).unwrap_err();
    assert!(err.to_string().contains("orange"));
}

#[test]
fn missing_sections_use_defaults() {
    let toml_str = r#"
[export]
reset_after_export = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(!config.export.reset_after_export);
    assert_eq!(config.palette.text_color, Foreground::Gray);
    assert_eq!(
        config.editor.placeholder,
        "Welcome to Discord Colored Text Generator!"
    );
}
