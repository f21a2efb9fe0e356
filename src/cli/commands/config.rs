//! Config file command.

use crate::config::{self, Config};

/// Show the config file location and values, or write the defaults
pub fn cmd_config(current: &Config, init: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if init {
        if let Some(path) = &path
            && path.exists()
        {
            println!("Config already exists at {}", path.display());
            println!("Delete it first to start over from the defaults.");
            return Ok(());
        }

        let written = config::save(&Config::default())?;
        println!("✓ Wrote default config to {}", written.display());
        return Ok(());
    }

    match &path {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not created, using defaults)", path.display()),
        None => println!("Config file: unavailable (no config directory on this system)"),
    }
    println!();
    print!("{}", toml::to_string_pretty(current)?);

    Ok(())
}
