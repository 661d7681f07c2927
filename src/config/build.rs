//! `[build]` section configuration.
//!
//! Output location, minification, and the generated crawler files
//! (sitemap, robots, feed).

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in seokit.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"        # Output directory
/// minify = true            # Minify HTML
///
/// [build.sitemap]
/// enable = true
///
/// [[build.robots.rules]]
/// user_agent = "*"
/// allow = ["/"]
/// disallow = ["/api/"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output directory (relative to root).
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify generated HTML and XML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Sitemap generation.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// robots.txt generation.
    #[serde(default)]
    pub robots: RobotsConfig,

    /// RSS feed of the blog.
    #[serde(default)]
    pub rss: RssConfig,
}

// ============================================================================
// Sub-sections
// ============================================================================

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path of the sitemap (relative to output).
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.robots]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    /// Enable robots.txt generation (always written to the output root).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Crawler rules, written in order.
    #[serde(default = "defaults::build::robots::rules")]
    #[educe(Default = defaults::build::robots::rules())]
    pub rules: Vec<RobotsRule>,
}

/// One `[[build.robots.rules]]` entry: a user-agent group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotsRule {
    /// Crawler name, `*` for all.
    pub user_agent: String,

    /// Path prefixes the crawler may visit.
    #[serde(default)]
    pub allow: Vec<String>,

    /// Path prefixes the crawler must not visit.
    #[serde(default)]
    pub disallow: Vec<String>,
}

/// `[build.rss]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable RSS feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path for RSS feed file (relative to output).
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(config.build.robots.enable);
        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
    }

    #[test]
    fn test_default_robots_rules() {
        let config: SiteConfig = toml::from_str("").unwrap();
        let rules = &config.build.robots.rules;

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].user_agent, "*");
        assert_eq!(rules[0].allow, vec!["/"]);
        assert_eq!(rules[0].disallow, vec!["/api/"]);
        assert_eq!(rules[1].user_agent, "Googlebot");
        assert_eq!(rules[1].disallow, vec!["/terms-and-conditions/"]);
    }

    #[test]
    fn test_custom_robots_rules_replace_defaults() {
        let config = r#"
            [[build.robots.rules]]
            user_agent = "Bingbot"
            disallow = ["/private/", "/tmp/"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        let rules = &config.build.robots.rules;

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].user_agent, "Bingbot");
        assert!(rules[0].allow.is_empty());
        assert_eq!(rules[0].disallow, vec!["/private/", "/tmp/"]);
    }

    #[test]
    fn test_toggle_generators() {
        let config = r#"
            [build]
            minify = false
            clean = true

            [build.sitemap]
            enable = false

            [build.robots]
            enable = false

            [build.rss]
            enable = false
            path = "blog/feed.xml"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert!(!config.build.sitemap.enable);
        assert!(!config.build.robots.enable);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("blog/feed.xml"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\ncontent = \"content\"");
        assert!(result.is_err());

        let result: Result<SiteConfig, _> =
            toml::from_str("[[build.robots.rules]]\nuser_agent = \"*\"\ncrawl_delay = 5");
        assert!(result.is_err());
    }

    #[test]
    fn test_robots_rule_requires_user_agent() {
        let result: Result<SiteConfig, _> =
            toml::from_str("[[build.robots.rules]]\nallow = [\"/\"]");
        assert!(result.is_err());
    }
}
