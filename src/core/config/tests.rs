use super::data::{path_display, Config, DEFAULT_ANIMATION_DURATION};
use super::io::ConfigError;
use crate::core::palette::{ColorKey, Rgb, DEFAULT_COLOR};
use std::collections::BTreeMap;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config {
        theme: Some("light".to_string()),
        default_color: Some("#222222".to_string()),
        feedback_seconds: Some(5),
        ..Default::default()
    };
    config.set_color_override("Blue", "#1e90ff".to_string());
    config.save_to_path(&config_path).expect("save failed");

    let loaded = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(loaded, config);
    assert_eq!(loaded.color_override("blue").map(String::as_str), Some("#1e90ff"));

    let mut loaded = loaded;
    assert!(loaded.unset_color_override("BLUE"));
    loaded.default_color = None;
    loaded.save_to_path(&config_path).expect("second save failed");

    let reloaded = Config::load_from_path(&config_path).expect("reload failed");
    assert!(reloaded.colors.is_empty());
    assert_eq!(reloaded.default_color, None);
    assert_eq!(reloaded.theme.as_deref(), Some("light"));
}

#[test]
fn parses_hand_written_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r##"
theme = "dark"
animation_millis = 750

[colors]
red = "#ff0000"
"##,
    )
    .expect("write failed");

    let config = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(config.animation_duration(), Duration::from_millis(750));
    assert_eq!(config.palette().color(ColorKey::Red), Rgb::new(255, 0, 0));
    assert_eq!(config.palette().color(ColorKey::Blue), ColorKey::Blue.builtin_value());
}

#[test]
fn invalid_toml_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "theme = [unclosed").expect("write failed");

    let err = Config::load_from_path(&config_path).expect_err("parse should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn defaults_apply_when_fields_are_unset() {
    let config = Config::default();
    assert_eq!(config.feedback_duration(), Duration::from_secs(3));
    assert_eq!(config.animation_duration(), DEFAULT_ANIMATION_DURATION);
    assert_eq!(config.theme_name(), "dark");
    assert_eq!(config.palette().default_color(), DEFAULT_COLOR);
}

#[test]
fn bad_overrides_fall_back_to_builtin_palette() {
    let mut colors = BTreeMap::new();
    colors.insert("green".to_string(), "lime".to_string());
    let config = Config {
        default_color: Some("#12".to_string()),
        colors,
        ..Default::default()
    };

    let palette = config.palette();
    assert_eq!(palette.color(ColorKey::Green), ColorKey::Green.builtin_value());
    assert_eq!(palette.default_color(), DEFAULT_COLOR);
}

#[cfg(unix)]
#[test]
fn path_display_abbreviates_home() {
    let home = std::env::var_os("HOME").map(std::path::PathBuf::from);
    if let Some(home) = home {
        let path = home.join(".config").join("marquee").join("config.toml");
        assert_eq!(path_display(&path), "~/.config/marquee/config.toml");
    }
}
