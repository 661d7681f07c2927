//! robots.txt generation.
//!
//! ```text
//! User-Agent: *
//! Allow: /
//! Disallow: /api/
//!
//! Sitemap: https://nextseo.com/sitemap.xml
//! ```

use crate::config::{RobotsRule, SiteConfig};

/// Render robots.txt: one group per rule, then the sitemap location when
/// the sitemap is enabled.
pub fn render_robots(config: &SiteConfig) -> String {
    let mut out = String::with_capacity(256);

    for rule in &config.build.robots.rules {
        out.push_str(&group(rule));
        out.push('\n');
    }

    if config.build.sitemap.enable
        && let Some(path) = config.sitemap_url_path()
    {
        out.push_str(&format!("Sitemap: {}\n", config.url_for(&path)));
    }

    out
}

/// One `User-Agent` block, each line newline-terminated.
fn group(rule: &RobotsRule) -> String {
    let allow = rule.allow.iter().map(|path| format!("Allow: {path}\n"));
    let disallow = rule.disallow.iter().map(|path| format!("Disallow: {path}\n"));

    std::iter::once(format!("User-Agent: {}\n", rule.user_agent))
        .chain(allow)
        .chain(disallow)
        .collect()
}
