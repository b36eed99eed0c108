use anyhow::Result;
use console::style;
use std::path::Path;

use tern::providers::config::{GatewayConfig, API_KEY_VAR, VERTEX_VAR};

/// Mask a credential down to a short prefix for operator display.
fn preview(key: &str) -> String {
    let prefix: String = key.chars().take(10).collect();
    format!("{prefix}...")
}

pub fn run() -> Result<()> {
    println!("{}", style("=== Agent Configuration Check ===").bold());
    println!();

    let env_file_exists = Path::new(".env").exists();
    println!("{} .env file exists: {env_file_exists}", style("✓").green());

    let config = GatewayConfig::from_env();

    let api_key_set = config.is_configured();
    println!("{} {API_KEY_VAR} set: {api_key_set}", style("✓").green());
    match &config.api_key {
        Some(key) if api_key_set => println!("  Key preview: {}", preview(key)),
        _ => println!(
            "  {} Please set your {API_KEY_VAR} in the .env file",
            style("✗").red()
        ),
    }

    println!("{} Model configured: {}", style("✓").green(), config.model_name());
    println!(
        "{} {VERTEX_VAR}: {}",
        style("✓").green(),
        config.use_vertex
    );

    println!();
    println!("{}", style("=== Overall Status ===").bold());
    if config.is_configured() {
        println!("Configuration valid: {}", style("yes").green());
    } else {
        println!("Configuration valid: {}", style("no").red());
        println!();
        println!("{}", style("=== Setup Instructions ===").bold());
        println!("1. Obtain an API key for the Gemini API");
        println!("2. Set {API_KEY_VAR} in your .env file or environment");
        println!("3. Run this command again to verify the configuration");
    }

    Ok(())
}
