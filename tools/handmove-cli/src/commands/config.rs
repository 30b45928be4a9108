//! Show or initialize the configuration file.

use std::path::PathBuf;

use handmove_common::config::{config_file_path, AppConfig};

pub fn run(
    config: AppConfig,
    path: Option<PathBuf>,
    init: bool,
    force: bool,
) -> anyhow::Result<()> {
    if init {
        let target = path.clone().unwrap_or_else(config_file_path);
        if target.exists() && !force {
            anyhow::bail!(
                "Config already exists at {} (use --force to overwrite)",
                target.display()
            );
        }
        let defaults = AppConfig::default();
        let written = match path {
            Some(path) => defaults.save_to(&path).map(|()| path),
            None => defaults.save(),
        }
        .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("Default configuration written to: {}", written.display());
        return Ok(());
    }

    let path = path.unwrap_or_else(config_file_path);
    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("  (not present, using defaults)");
    }
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
