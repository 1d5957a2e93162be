//! Config command handlers

use anyhow::{bail, Result};
use notely_core::Config;
use std::path::PathBuf;

use crate::output::Output;

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load()?;

    if output.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "config_file": Config::config_file_path(),
                "data_dir": config.data_dir,
            })
        );
    } else {
        println!("Config file: {}", Config::config_file_path().display());
        println!("data_dir:    {}", config.data_dir.display());
    }
    Ok(())
}

/// Set a configuration value and save it
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load()?;

    match key.as_str() {
        "data_dir" => config.data_dir = PathBuf::from(value),
        _ => bail!("Unknown configuration key: {} (expected data_dir)", key),
    }

    config.save()?;
    output.success(&format!("Set {}", key));
    Ok(())
}
