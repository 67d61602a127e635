//! Configuration types for Hanzi Board
//!
//! Defines `Settings` and its sections, one per `[table]` in `config.toml`.

use std::time::Duration;

use hanzi_backend::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_STROKE_URL_TEMPLATE};
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub strokes: StrokeSettings,

    #[serde(default)]
    pub board: BoardSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Metadata backend settings
///
/// The API key is read from the environment, never from this file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Stroke data source settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StrokeSettings {
    /// URL with a `{char}` placeholder
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
        }
    }
}

/// Practice board settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BoardSettings {
    /// Board height in terminal rows (width is twice this)
    #[serde(default = "default_rows")]
    pub rows: u16,

    /// Empty margin around the character, as a fraction of the board side
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Animation speed multiplier
    #[serde(default = "default_stroke_speed")]
    pub stroke_speed: f64,

    #[serde(default = "default_delay_between_strokes_ms")]
    pub delay_between_strokes_ms: u64,

    /// Delay between a metadata load and the automatic demo
    #[serde(default = "default_auto_animate_delay_ms")]
    pub auto_animate_delay_ms: u64,

    /// Quiz matching leniency; higher accepts sloppier strokes
    #[serde(default = "default_leniency")]
    pub leniency: f64,

    /// Misses on one stroke before it is highlighted (0 disables hints)
    #[serde(default = "default_show_hint_after_misses")]
    pub show_hint_after_misses: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            padding: default_padding(),
            stroke_speed: default_stroke_speed(),
            delay_between_strokes_ms: default_delay_between_strokes_ms(),
            auto_animate_delay_ms: default_auto_animate_delay_ms(),
            leniency: default_leniency(),
            show_hint_after_misses: default_show_hint_after_misses(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Character looked up on startup
    #[serde(default = "default_character")]
    pub default_character: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_character: default_character(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_url_template() -> String {
    DEFAULT_STROKE_URL_TEMPLATE.to_string()
}

fn default_rows() -> u16 {
    16
}

fn default_padding() -> f64 {
    0.06
}

fn default_stroke_speed() -> f64 {
    1.0
}

fn default_delay_between_strokes_ms() -> u64 {
    200
}

fn default_auto_animate_delay_ms() -> u64 {
    500
}

fn default_leniency() -> f64 {
    1.0
}

fn default_show_hint_after_misses() -> u32 {
    3
}

fn default_character() -> String {
    "猫".to_string()
}
