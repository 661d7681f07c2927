//! Site initialization.
//!
//! Writes a default `seokit.toml` into the site root.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::fs;

/// Create the site root and its default config file.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let config_path = &config.config_path;

    if config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config_path.display()
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    init_default_config(config)?;
    Ok(())
}

/// Write the default configuration to `config.config_path`.
fn init_default_config(config: &SiteConfig) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(&config.config_path, content)
        .with_context(|| format!("Failed to write {}", config.config_path.display()))?;
    Ok(())
}
