//! `marquee set` / `marquee unset`.
//!
//! Values are validated before they reach the config file, so a saved config
//! always produces the palette and timings the user asked for.

pub mod error;

use crate::core::config::Config;
use crate::core::palette::{ColorKey, OptionKey, Rgb};
use crate::ui::theme::Theme;

use self::error::SettingError;

/// Keys accepted by `set` and `unset`.
pub const KEYS: &[&str] = &[
    "theme",
    "default-color",
    "feedback-seconds",
    "animation-millis",
    "color.<blue|red|green>",
];

/// Upper bounds for the timing keys.
pub const MAX_FEEDBACK_SECONDS: u64 = 3_600;
pub const MAX_ANIMATION_MILLIS: u64 = 60_000;

const HEX_HINT: &str = "Use a hex color such as #2a71d0 or #fff";

fn invalid(key: &str, value: &str, hint: &'static str) -> SettingError {
    SettingError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        hint,
    }
}

fn parse_hex(key: &str, value: &str) -> Result<String, SettingError> {
    Rgb::parse_hex(value)
        .map(|rgb| rgb.to_string())
        .ok_or_else(|| invalid(key, value, HEX_HINT))
}

fn parse_bounded(
    key: &str,
    value: &str,
    max: u64,
    hint: &'static str,
) -> Result<u64, SettingError> {
    match value.trim().parse::<u64>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(invalid(key, value, hint)),
    }
}

fn color_key(key: &str) -> Result<Option<ColorKey>, SettingError> {
    match key.strip_prefix("color.") {
        Some(name) => ColorKey::from_id(name)
            .map(Some)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string())),
        None => Ok(None),
    }
}

/// Apply `key = value` to `config`. Returns a confirmation message.
pub fn set_value(config: &mut Config, key: &str, value: &str) -> Result<String, SettingError> {
    if let Some(color) = color_key(key)? {
        let hex = parse_hex(key, value)?;
        config.set_color_override(color.id(), hex.clone());
        return Ok(format!("✅ Set {key} to: {hex}"));
    }

    match key {
        "theme" => {
            if !Theme::is_known(value) {
                return Err(invalid(key, value, "Available themes: dark, light"));
            }
            let name = value.trim().to_ascii_lowercase();
            config.theme = Some(name.clone());
            Ok(format!("✅ Set theme to: {name}"))
        }
        "default-color" => {
            let hex = parse_hex(key, value)?;
            config.default_color = Some(hex.clone());
            Ok(format!("✅ Set default-color to: {hex}"))
        }
        "feedback-seconds" => {
            let seconds = parse_bounded(
                key,
                value,
                MAX_FEEDBACK_SECONDS,
                "Use a whole number of seconds from 1 to 3600",
            )?;
            config.feedback_seconds = Some(seconds);
            Ok(format!("✅ Set feedback-seconds to: {seconds}"))
        }
        "animation-millis" => {
            let millis = parse_bounded(
                key,
                value,
                MAX_ANIMATION_MILLIS,
                "Use a whole number of milliseconds from 1 to 60000",
            )?;
            config.animation_millis = Some(millis);
            Ok(format!("✅ Set animation-millis to: {millis}"))
        }
        _ => Err(SettingError::UnknownKey(key.to_string())),
    }
}

/// Remove `key` from `config`, restoring its built-in default.
pub fn unset_value(config: &mut Config, key: &str) -> Result<String, SettingError> {
    if let Some(color) = color_key(key)? {
        config.unset_color_override(color.id());
        return Ok(format!("✅ Unset {key}"));
    }

    match key {
        "theme" => config.theme = None,
        "default-color" => config.default_color = None,
        "feedback-seconds" => config.feedback_seconds = None,
        "animation-millis" => config.animation_millis = None,
        _ => return Err(SettingError::UnknownKey(key.to_string())),
    }
    Ok(format!("✅ Unset {key}"))
}

/// Load the config, mutate it, and save it back.
pub fn update_config<F>(mutator: F) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<String, SettingError>,
{
    let mut config = Config::load().map_err(|e| SettingError::ConfigError(e.to_string()))?;
    let message = mutator(&mut config)?;
    config
        .save()
        .map_err(|e| SettingError::ConfigError(e.to_string()))?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn sets_and_normalizes_values() {
        let mut config = Config::default();

        set_value(&mut config, "theme", "Light").expect("theme");
        set_value(&mut config, "default-color", "#ABC").expect("default color");
        set_value(&mut config, "feedback-seconds", "5").expect("feedback");
        set_value(&mut config, "animation-millis", "400").expect("animation");
        set_value(&mut config, "color.Blue", "#000080").expect("color");

        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.default_color.as_deref(), Some("#aabbcc"));
        assert_eq!(config.feedback_duration(), Duration::from_secs(5));
        assert_eq!(config.animation_duration(), Duration::from_millis(400));
        assert_eq!(
            config.color_override("blue").map(String::as_str),
            Some("#000080")
        );
    }

    #[test]
    fn rejects_bad_values_and_keys() {
        let mut config = Config::default();

        assert!(matches!(
            set_value(&mut config, "theme", "dracula"),
            Err(SettingError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_value(&mut config, "default-color", "grey"),
            Err(SettingError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_value(&mut config, "feedback-seconds", "0"),
            Err(SettingError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_value(&mut config, "color.purple", "#800080"),
            Err(SettingError::UnknownKey(_))
        ));
        assert!(matches!(
            set_value(&mut config, "volume", "11"),
            Err(SettingError::UnknownKey(_))
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn timing_values_are_capped() {
        let mut config = Config::default();

        for (key, value) in [
            ("feedback-seconds", "9223372036854775807"),
            ("feedback-seconds", "3601"),
            ("animation-millis", "60001"),
        ] {
            assert!(
                matches!(
                    set_value(&mut config, key, value),
                    Err(SettingError::InvalidValue { .. })
                ),
                "{key} = {value}"
            );
        }
        assert_eq!(config, Config::default());

        set_value(&mut config, "feedback-seconds", "3600").expect("max feedback");
        set_value(&mut config, "animation-millis", "60000").expect("max animation");
        assert_eq!(config.feedback_duration(), Duration::from_secs(3_600));
    }

    #[test]
    fn unset_restores_defaults() {
        let mut config = Config::default();
        set_value(&mut config, "color.red", "#ff0000").expect("color");
        set_value(&mut config, "feedback-seconds", "9").expect("feedback");

        unset_value(&mut config, "color.red").expect("unset color");
        unset_value(&mut config, "feedback-seconds").expect("unset feedback");

        assert_eq!(config, Config::default());
        assert!(unset_value(&mut config, "volume").is_err());
    }
}
