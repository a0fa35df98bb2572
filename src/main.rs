//! plume - Main Entry Point
//!
//! Loads the provider/model configuration, opens the profile store,
//! and hands control to the interactive chat prompter.

use std::process;

use plume::cli::ChatPrompter;
use plume::config::{AppConfig, API_KEY_ENV_VAR};
use plume::llm::ChatClient;
use plume::profile::ProfileStore;

#[tokio::main]
async fn main() {
    let config_path = AppConfig::default_path();
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: Failed to load {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };

    let api_key = match config.resolve_api_key() {
        Some(key) => key,
        None => {
            eprintln!("ERROR: No API key configured");
            eprintln!("\nTo enable chat:");
            eprintln!("   1. Get an API key from your provider (e.g. https://openrouter.ai)");
            eprintln!(
                "   2. Set environment variable: export {}=your_key",
                API_KEY_ENV_VAR
            );
            eprintln!(
                "   3. Or add an \"api_key\" field to {}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    let profiles = match ProfileStore::new(AppConfig::config_dir().join("profiles.json")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("ERROR: Failed to open profile store: {}", e);
            process::exit(1);
        }
    };

    let client = ChatClient::new(api_key, config.base_url.clone());
    let mut prompter = ChatPrompter::new(config, config_path, profiles, client);

    match prompter.run().await {
        Ok(()) => {
            println!("\nGoodbye!");
        }
        Err(e) => {
            eprintln!("\nERROR: plume encountered an error: {}", e);
            eprintln!("Please check your terminal compatibility and try again.");
            process::exit(1);
        }
    }
}
