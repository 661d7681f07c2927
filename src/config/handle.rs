//! Process-wide config handle.
//!
//! The dev server reads the config once per request and the watcher swaps
//! it when `seokit.toml` changes. `arc-swap` keeps both sides lock-free:
//!
//! ```text
//!   request thread ──► cfg() ──► Arc<SiteConfig>   (old snapshot stays valid)
//!   watch thread   ──► reload_config() ──► CONFIG.store(new)
//! ```

use super::SiteConfig;
use crate::{cli::Cli, utils::hash};
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Current config. Starts as the default and is replaced by `init_config`.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content behind `CONFIG`.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Snapshot of the current config.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the loaded config (called once at startup).
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(hash::compute(content.as_bytes()), Ordering::Relaxed);
    }
    CONFIG.store(Arc::new(config));
}

/// Re-read the config file and swap it in.
///
/// Returns `Ok(false)` when the file content is unchanged. A config that
/// fails to parse or validate leaves the current one in place.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .context("config reload requested before CLI arguments were loaded")?;

    let content = fs::read_to_string(&current.config_path)
        .with_context(|| format!("failed to read {}", current.config_path.display()))?;
    let new_hash = hash::compute(content.as_bytes());
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let config = parse_with_cli(&content, cli)?;
    config.validate()?;

    CONFIG.store(Arc::new(config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    Ok(true)
}

/// Config from content already read, with the startup CLI overrides applied.
fn parse_with_cli(content: &str, cli: &'static Cli) -> Result<SiteConfig> {
    let mut config = SiteConfig::from_str(content)?;
    config.update_with_cli(cli);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_reload_without_cli_is_error() {
        // default config has no CLI attached
        let config = SiteConfig::default();
        assert!(config.cli.is_none());
        CONFIG.store(Arc::new(config));

        assert!(reload_config().is_err());
    }

    #[test]
    fn test_reload_parses_hashed_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("seokit.toml"), "[base]\ntitle = \"On Disk\"\n").unwrap();
        let root = dir.path().to_str().unwrap().to_owned();
        let cli: &'static Cli = Box::leak(Box::new(Cli::parse_from([
            "seokit", "--root", root.as_str(), "build", "--minify=false",
        ])));

        // the file changed after it was read; the read content wins
        let config = parse_with_cli("[base]\ntitle = \"Read\"\n", cli).unwrap();
        assert_eq!(config.base.title, "Read");
        assert!(!config.build.minify);
        assert!(config.config_path.ends_with("seokit.toml"));
        assert!(config.build.output.ends_with("public"));
    }

    #[test]
    fn test_reload_rejects_bad_content() {
        let cli: &'static Cli = Box::leak(Box::new(Cli::parse_from(["seokit", "build"])));
        assert!(parse_with_cli("[base\n", cli).is_err());
        assert!(parse_with_cli("[extra]\nkey = 1\n", cli).is_err());
    }
}
