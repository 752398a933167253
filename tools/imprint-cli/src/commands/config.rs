//! Show or initialize the configuration file.

use imprint_common::config::{config_file_path, AppConfig};

pub fn run(init: bool) -> anyhow::Result<()> {
    let path = config_file_path();

    if init {
        AppConfig::default().save()?;
        println!("Wrote default config to {}", path.display());
    } else if !path.exists() {
        println!("No config file at {} (using built-in defaults)", path.display());
    } else {
        println!("Config file: {}", path.display());
    }

    let config = AppConfig::load();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
