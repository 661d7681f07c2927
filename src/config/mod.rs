//! Site configuration management for `seokit.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[base]`    | Site identity (title, url, language)              |
//! | `[seo]`     | Social cards and structured data defaults         |
//! | `[build]`   | Output, minify, sitemap, robots, feed             |
//! | `[serve]`   | Development server (port, interface, watch)       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "NextSEO"
//! url = "https://nextseo.com"
//!
//! [seo]
//! twitter_creator = "@eneax"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [serve]
//! port = 5277
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod seo;
mod serve;

pub use build::RobotsRule;
pub use handle::{cfg, init_config, reload_config};

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use seo::SeoConfig;
use serve::ServeConfig;

use crate::{
    cli::{Cli, Commands},
    router::Route,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Component, Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing seokit.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Social and structured data settings
    #[serde(default)]
    pub seo: SeoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config file named by the CLI (defaults if absent) and apply CLI overrides.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    // ------------------------------------------------------------------------
    // URLs
    // ------------------------------------------------------------------------

    /// Site origin without trailing slash, e.g. `https://nextseo.com`.
    pub fn base_url(&self) -> &str {
        self.base.url.trim_end_matches('/')
    }

    /// Absolute URL for a site-relative path.
    ///
    /// `/` maps to `https://nextseo.com/`, `/blog` to `https://nextseo.com/blog`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url())
        } else {
            format!("{}/{path}", self.base_url())
        }
    }

    /// Site-relative URL path of a file inside the output directory.
    ///
    /// `public/sitemap.xml` → `/sitemap.xml`. Relative paths are taken as
    /// already relative to output. `None` for files outside output.
    pub fn url_path_of(&self, file: &Path) -> Option<String> {
        let relative = match file.strip_prefix(&self.build.output) {
            Ok(relative) => relative,
            Err(_) if file.is_relative() => file,
            Err(_) => return None,
        };
        let path = relative.to_string_lossy().replace('\\', "/");
        Some(format!("/{}", path.trim_start_matches('/')))
    }

    /// URL path of the sitemap, e.g. `/sitemap.xml`.
    pub fn sitemap_url_path(&self) -> Option<String> {
        self.url_path_of(&self.build.sitemap.path)
    }

    /// URL path of the feed, e.g. `/feed.xml`.
    pub fn feed_url_path(&self) -> Option<String> {
        self.url_path_of(&self.build.rss.path)
    }

    // ------------------------------------------------------------------------
    // CLI overrides
    // ------------------------------------------------------------------------

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
            Self::update_option(&mut self.build.robots.enable, args.robots.as_ref());
            Self::update_option(&mut self.build.rss.enable, args.rss.as_ref());
            Self::update_option(&mut self.base.url, args.base_url.as_ref());
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.sitemap.path = self.build.output.join(&self.build.sitemap.path);
        self.build.rss.path = self.build.output.join(&self.build.rss.path);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if let Some(cli) = self.cli
            && !cli.is_init()
            && !self.config_path.exists()
        {
            bail!("Config file not found. Run `seokit init` first.");
        }

        let url = &self.base.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        self.validate_generated_path("[build.sitemap.path]", &self.build.sitemap.path)?;
        self.validate_generated_path("[build.rss.path]", &self.build.rss.path)?;
        self.validate_output_collisions()?;

        for rule in &self.build.robots.rules {
            if rule.user_agent.trim().is_empty() {
                bail!(ConfigError::Validation(
                    "[build.robots.rules] user_agent must not be empty".into()
                ));
            }
            if let Some(bad) = rule
                .allow
                .iter()
                .chain(&rule.disallow)
                .find(|p| !p.is_empty() && !p.starts_with(['/', '*']))
            {
                bail!(ConfigError::Validation(format!(
                    "[build.robots.rules] path `{bad}` must start with `/` or `*`"
                )));
            }
        }

        if self.cli.is_some_and(Cli::is_serve) && self.serve.interface.parse::<IpAddr>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[serve.interface] `{}` is not an IP address",
                self.serve.interface
            )));
        }

        Ok(())
    }

    /// Generated files must land inside the output directory.
    fn validate_generated_path(&self, field: &str, path: &Path) -> Result<()> {
        let inside = path
            .strip_prefix(&self.build.output)
            .is_ok_and(|rel| {
                rel.file_name().is_some()
                    && rel.components().all(|c| matches!(c, Component::Normal(_)))
            });
        if !inside {
            bail!(ConfigError::Validation(format!(
                "{field} must be a relative file path inside the output directory"
            )));
        }
        Ok(())
    }

    /// Enabled sitemap and feed files must not take the place of another
    /// written file (page indexes, robots.txt, each other), nor sit inside it.
    fn validate_output_collisions(&self) -> Result<()> {
        let build = &self.build;
        let mut taken: Vec<String> = Route::pages()
            .iter()
            .filter_map(|route| route.path(self))
            .map(|path| format!("{}/index.html", path.trim_end_matches('/')))
            .collect();
        if build.robots.enable {
            taken.push("/robots.txt".into());
        }

        let generated = [
            ("[build.sitemap.path]", build.sitemap.enable, self.sitemap_url_path()),
            ("[build.rss.path]", build.rss.enable, self.feed_url_path()),
        ];
        for (field, enabled, path) in generated {
            let Some(path) = path.filter(|_| enabled) else {
                continue;
            };
            if path.ends_with("/index.html") {
                bail!(ConfigError::Validation(format!(
                    "{field} `{path}` must not be a page index"
                )));
            }
            if let Some(other) = taken.iter().find(|other| paths_overlap(&path, other)) {
                bail!(ConfigError::Validation(format!(
                    "{field} `{path}` collides with `{other}`"
                )));
            }
            taken.push(path);
        }

        Ok(())
    }
}

/// Same URL path, or one is a directory prefix of the other.
fn paths_overlap(a: &str, b: &str) -> bool {
    let nested = |inner: &str, outer: &str| {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
    };
    a == b || nested(a, b) || nested(b, a)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    fn config_with_output() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/site/public");
        config.build.sitemap.path = PathBuf::from("/site/public/sitemap.xml");
        config.build.rss.path = PathBuf::from("/site/public/feed.xml");
        config
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str("[base]\ntitle = \"Shop\"").unwrap();
        assert_eq!(config.base.title, "Shop");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[base\ntitle = \"Shop\"").is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[deploy]\nprovider = \"github\"").is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_url_for() {
        let mut config = SiteConfig::default();
        assert_eq!(config.url_for("/"), "https://nextseo.com/");
        assert_eq!(config.url_for("/blog"), "https://nextseo.com/blog");

        config.base.url = "https://example.com/".into();
        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.url_for("/products/x"), "https://example.com/products/x");
        assert_eq!(config.url_for("sitemap.xml"), "https://example.com/sitemap.xml");
    }

    #[test]
    fn test_url_path_of() {
        let config = config_with_output();

        assert_eq!(config.sitemap_url_path().as_deref(), Some("/sitemap.xml"));
        assert_eq!(config.feed_url_path().as_deref(), Some("/feed.xml"));
        assert_eq!(
            config.url_path_of(Path::new("/site/public/blog/feed.xml")).as_deref(),
            Some("/blog/feed.xml")
        );
        assert_eq!(config.url_path_of(Path::new("/elsewhere/feed.xml")), None);

        // before CLI paths are applied
        let config = SiteConfig::default();
        assert_eq!(config.sitemap_url_path().as_deref(), Some("/sitemap.xml"));
    }

    #[test]
    fn test_update_with_cli_paths() {
        let cli = leak_cli(&["seokit", "--root", "/site", "-o", "dist", "build"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert_eq!(config.get_root(), Path::new("/site"));
        assert_eq!(config.config_path, PathBuf::from("/site/seokit.toml"));
        assert_eq!(config.build.output, PathBuf::from("/site/dist"));
        assert_eq!(config.build.sitemap.path, PathBuf::from("/site/dist/sitemap.xml"));
        assert_eq!(config.build.rss.path, PathBuf::from("/site/dist/feed.xml"));
    }

    #[test]
    fn test_update_with_cli_build_flags() {
        let cli = leak_cli(&[
            "seokit",
            "--root",
            "/site",
            "build",
            "--clean",
            "--minify=false",
            "--sitemap=false",
            "--base-url",
            "https://preview.example.com",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert!(config.build.clean);
        assert!(!config.build.minify);
        assert!(!config.build.sitemap.enable);
        assert!(config.build.robots.enable);
        assert_eq!(config.base.url, "https://preview.example.com");
    }

    #[test]
    fn test_update_with_cli_serve() {
        let cli = leak_cli(&[
            "seokit", "--root", "/site", "serve", "-i", "0.0.0.0", "-p", "3000", "-w", "false",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert_eq!(config.serve.interface, "0.0.0.0");
        assert_eq!(config.serve.port, 3000);
        assert!(!config.serve.watch);
        // canonical origin is not rewritten to the local address
        assert_eq!(config.base.url, "https://nextseo.com");
    }

    #[test]
    fn test_update_with_cli_init_name() {
        let cli = leak_cli(&["seokit", "--root", "/site", "init", "demo"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert_eq!(config.get_root(), Path::new("/site/demo"));
        assert_eq!(config.config_path, PathBuf::from("/site/demo/seokit.toml"));
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(config_with_output().validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = config_with_output();
        config.base.url = "nextseo.com".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[base.url]"));
    }

    #[test]
    fn test_validate_generated_path_escapes_output() {
        let mut config = config_with_output();
        config.build.sitemap.path = PathBuf::from("/etc/sitemap.xml");
        assert!(config.validate().is_err());

        let mut config = config_with_output();
        config.build.rss.path = PathBuf::from("/site/public/../feed.xml");
        assert!(config.validate().is_err());

        let mut config = config_with_output();
        config.build.rss.path = PathBuf::from("/site/public");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_robots_rules() {
        let mut config = config_with_output();
        config.build.robots.rules[0].user_agent = "  ".into();
        assert!(config.validate().is_err());

        let mut config = config_with_output();
        config.build.robots.rules[0].disallow = vec!["api/".into()];
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("api/"));

        let mut config = config_with_output();
        config.build.robots.rules[0].disallow = vec![String::new(), "*.pdf".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap().to_owned();
        let cli = leak_cli(&["seokit", "--root", &root, "build"]);
        let config = SiteConfig::load(cli).unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("seokit.toml"),
            "[base]\ntitle = \"Shop\"\nurl = \"https://shop.example.com\"\n",
        )
        .unwrap();
        let root = dir.path().to_str().unwrap().to_owned();
        let cli = leak_cli(&["seokit", "--root", &root, "build"]);
        let config = SiteConfig::load(cli).unwrap();

        assert_eq!(config.base.title, "Shop");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_serve_interface() {
        let cli = leak_cli(&["seokit", "serve", "-i", "localhost"]);
        let mut config = config_with_output();
        config.serve.interface = "localhost".into();
        config.cli = Some(cli);
        config.config_path = PathBuf::from(file!());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[serve.interface]"));
    }

    #[test]
    fn test_validate_feed_shadowing_pages() {
        let files = [
            "about",
            "blog",
            "products/laptop-pro",
            "blog/seo-best-practices/index.html",
            "index.html",
            "robots.txt",
            "robots.txt/feed.xml",
        ];
        for file in files {
            let mut config = config_with_output();
            config.build.rss.path = Path::new("/site/public").join(file);
            let err = config.validate().unwrap_err().to_string();
            assert!(err.contains("[build.rss.path]"), "{file}: {err}");
        }
    }

    #[test]
    fn test_validate_sitemap_and_feed_collide() {
        let mut config = config_with_output();
        config.build.rss.path = config.build.sitemap.path.clone();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("collides with `/sitemap.xml`"), "{err}");

        config.build.rss.path = PathBuf::from("/site/public/sitemap.xml/feed.xml");
        assert!(config.validate().is_err());

        config.build.sitemap.path = PathBuf::from("/site/public/about/index.html");
        config.build.rss.path = PathBuf::from("/site/public/feed.xml");
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.sitemap.path]"), "{err}");
    }

    #[test]
    fn test_validate_generated_paths_beside_pages() {
        let mut config = config_with_output();
        config.build.rss.path = PathBuf::from("/site/public/blog/rss.xml");
        config.build.sitemap.path = PathBuf::from("/site/public/about/sitemap.xml");
        assert!(config.validate().is_ok());

        // disabled writers leave their paths free
        let mut config = config_with_output();
        config.build.robots.enable = false;
        config.build.sitemap.enable = false;
        config.build.rss.path = PathBuf::from("/site/public/robots.txt");
        config.build.sitemap.path = config.build.rss.path.clone();
        assert!(config.validate().is_ok());
    }
}
