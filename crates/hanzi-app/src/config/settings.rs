//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use hanzi_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "hanzi-board";

/// Environment variables checked for the backend API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Default location: `{config_dir}/hanzi-board/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Read the backend API key from the environment.
///
/// `GEMINI_API_KEY` wins over `API_KEY`; empty values are ignored.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.model, "gemini-2.5-flash");
        assert_eq!(settings.backend.timeout_secs, 30);
        assert_eq!(settings.board.rows, 16);
        assert_eq!(settings.board.delay_between_strokes_ms, 200);
        assert_eq!(settings.board.auto_animate_delay_ms, 500);
        assert_eq!(settings.board.show_hint_after_misses, 3);
        assert_eq!(settings.behavior.default_character, "猫");
        assert!(settings.strokes.url_template.contains("{char}"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[board]
rows = 20
leniency = 1.5

[behavior]
default_character = "水"
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.board.rows, 20);
        assert_eq!(settings.board.leniency, 1.5);
        assert_eq!(settings.board.stroke_speed, 1.0);
        assert_eq!(settings.behavior.default_character, "水");
        assert_eq!(settings.backend, Default::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[board\nrows = ").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_parse_settings_reports_type_errors() {
        let err = parse_settings("[board]\nrows = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_timeout_never_zero() {
        let mut settings = Settings::default();
        settings.backend.timeout_secs = 0;
        assert_eq!(settings.backend.timeout().as_secs(), 1);
    }

    #[test]
    #[serial]
    fn test_api_key_prefers_gemini_variable() {
        std::env::set_var("GEMINI_API_KEY", "gemini-key");
        std::env::set_var("API_KEY", "generic-key");
        assert_eq!(api_key_from_env().as_deref(), Some("gemini-key"));
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
    }

    #[test]
    #[serial]
    fn test_api_key_falls_back_to_generic_variable() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::set_var("API_KEY", "generic-key");
        assert_eq!(api_key_from_env().as_deref(), Some("generic-key"));
        std::env::remove_var("API_KEY");
    }

    #[test]
    #[serial]
    fn test_api_key_ignores_empty_values() {
        std::env::set_var("GEMINI_API_KEY", "  ");
        std::env::remove_var("API_KEY");
        assert_eq!(api_key_from_env(), None);
        std::env::remove_var("GEMINI_API_KEY");
    }
}
