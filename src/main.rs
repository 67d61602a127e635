//! Hanzi Board - A terminal stroke-order practice board
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use hanzi_app::config::{self, Settings};
use hanzi_app::state::STATUS_INVALID_INPUT;
use hanzi_backend::{fetch_character_metadata, GeminiClient, GeminiConfig};
use hanzi_core::first_ideograph;
use hanzi_core::prelude::*;

/// Hanzi Board - Practise Chinese stroke order in the terminal
#[derive(Parser, Debug)]
#[command(name = "hanzi")]
#[command(about = "A terminal stroke-order practice board for Chinese characters", long_about = None)]
struct Args {
    /// Character to open with (overrides `behavior.default_character`)
    #[arg(value_name = "CHAR")]
    character: Option<String>,

    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the character's metadata as JSON and exit (no TUI)
    #[arg(long)]
    lookup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    hanzi_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Hanzi Board starting");
    info!("═══════════════════════════════════════════════════════");

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(character) = args.character.filter(|c| !c.trim().is_empty()) {
        settings.behavior.default_character = character.trim().to_string();
    }
    let api_key = config::api_key_from_env();
    if api_key.is_none() {
        warn!("No API key in the environment, metadata lookups will use the fallback");
    }

    let result = if args.lookup {
        lookup(&settings, api_key).await
    } else {
        hanzi_tui::run(settings, api_key).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Headless metadata lookup for the configured character
async fn lookup(settings: &Settings, api_key: Option<String>) -> Result<()> {
    let Some(character) = lookup_character(&settings.behavior.default_character) else {
        warn!(
            "Rejected lookup input {:?}",
            settings.behavior.default_character
        );
        eprintln!("{STATUS_INVALID_INPUT}");
        std::process::exit(1);
    };

    let client = GeminiClient::new(GeminiConfig {
        api_key,
        model: settings.backend.model.clone(),
        base_url: settings.backend.base_url.clone(),
        timeout: settings.backend.timeout(),
    })?;

    let data = fetch_character_metadata(&client, &character).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

/// The single character a lookup is made for, as the TUI would pick it
fn lookup_character(input: &str) -> Option<String> {
    first_ideograph(input).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_uses_first_character_only() {
        assert_eq!(lookup_character("猫狗").as_deref(), Some("猫"));
        assert_eq!(lookup_character("  水火 ").as_deref(), Some("水"));
    }

    #[test]
    fn test_lookup_rejects_non_chinese_input() {
        assert_eq!(lookup_character("cat"), None);
        assert_eq!(lookup_character(""), None);
    }

    #[test]
    fn test_args_parse_character_and_lookup() {
        let args = Args::parse_from(["hanzi", "猫狗", "--lookup"]);
        assert_eq!(args.character.as_deref(), Some("猫狗"));
        assert!(args.lookup);
        assert!(args.config.is_none());
    }
}
