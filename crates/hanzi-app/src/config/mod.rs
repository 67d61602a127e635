//! Configuration file parsing for Hanzi Board
//!
//! Supports `{config_dir}/hanzi-board/config.toml` (or a path given on the
//! command line) plus the backend API key from the environment.

pub mod settings;
pub mod types;

pub use settings::{
    api_key_from_env, default_config_path, load_settings, parse_settings, API_KEY_ENV_VARS,
};
pub use types::{BackendSettings, BehaviorSettings, BoardSettings, Settings, StrokeSettings};
