//! Config command handler

use crate::args::ConfigSubcommand;
use degree_planner::config::Config;
use degree_planner::{error, info};
use std::io::{self, Write};
use std::path::Path;

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is rejected, or
/// the config file cannot be written or removed
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

fn show_key(config: &Config, key: &str) -> Result<(), String> {
    let value = config
        .get(key)
        .ok_or_else(|| format!("✗ Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn set_key(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| {
        error!("Rejected config value {key} = {value}: {e}");
        format!("✗ {e}")
    })?;
    save(config)?;

    println!("✓ Set {key} = {value}");
    report_paths(config, key);
    info!("Config key {key} updated");
    Ok(())
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| {
        error!("Cannot unset config key {key}: {e}");
        format!("✗ {e}")
    })?;
    save(config)?;

    let value = config.get(key).unwrap_or_default();
    println!("✓ Reset {key} to default ({value})");
    report_paths(config, key);
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!("✗ Failed to save config: {e}")
    })
}

/// After touching a path-valued key, say whether the file is actually there
fn report_paths(config: &Config, key: &str) {
    let path = match key {
        "catalog" | "catalog.path" | "catalog_path" | "catalog-path" => &config.catalog.path,
        "script" | "transfer.script" => &config.transfer.script,
        _ => return,
    };
    if !path.is_empty() && !Path::new(path).exists() {
        println!("  note: {path} does not exist yet");
    }
}

fn reset() -> Result<(), String> {
    let config_file = Config::get_config_file_path();
    if !config_file.exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset {} to defaults? (y/n): ", config_file.display());
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| {
            error!("Failed to remove {}: {e}", config_file.display());
            format!("✗ Failed to remove config file: {e}")
        })?;
        println!("✓ Config reset to defaults");
    } else {
        println!("Reset cancelled");
    }
    Ok(())
}
