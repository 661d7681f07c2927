//! Output minification, switched by `[build] minify`.

use crate::config::SiteConfig;

/// Kind of generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Xml,
    /// robots.txt and other plain text, never touched.
    Text,
}

/// Minify `content` when the config asks for it.
pub fn minify(content: String, format: Format, config: &SiteConfig) -> String {
    if !config.build.minify {
        return content;
    }
    match format {
        Format::Html => minify_html(&content),
        Format::Xml => minify_xml(&content),
        Format::Text => content,
    }
}

fn minify_html(html: &str) -> String {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.minify_css = true;
    // JSON-LD blocks are data, leave them byte-for-byte
    cfg.minify_js = false;
    let bytes = minify_html::minify(html.as_bytes(), &cfg);
    String::from_utf8(bytes).unwrap_or_else(|_| html.to_owned())
}

/// Join lines with surrounding whitespace removed.
fn minify_xml(xml: &str) -> String {
    xml.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(minify: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = minify;
        config
    }

    #[test]
    fn test_minify_html_strips_whitespace() {
        let html = "<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let out = minify(html.into(), Format::Html, &config(true));

        assert!(!out.contains("\n  "));
        assert!(out.contains("<p>Hello</p>"));
        assert!(out.len() < html.len());
    }

    #[test]
    fn test_minify_html_keeps_json_ld() {
        let html = r#"<html><head><script type="application/ld+json">{"@type":"Product","name":"Smart Watch"}</script></head><body></body></html>"#;
        let out = minify(html.into(), Format::Html, &config(true));

        assert!(out.contains(r#"{"@type":"Product","name":"Smart Watch"}"#));
    }

    #[test]
    fn test_minify_disabled_is_identity() {
        let html = "<html>\n  <body>\n  </body>\n</html>";
        assert_eq!(minify(html.into(), Format::Html, &config(false)), html);

        let xml = "<urlset>\n  <url/>\n</urlset>";
        assert_eq!(minify(xml.into(), Format::Xml, &config(false)), xml);
    }

    #[test]
    fn test_minify_xml_sitemap() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">

  <url>
    <loc>https://nextseo.com/</loc>
  </url>
</urlset>"#;
        let out = minify(xml.into(), Format::Xml, &config(true));

        assert_eq!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://nextseo.com/</loc></url></urlset>"#
        );
    }

    #[test]
    fn test_minify_text_untouched() {
        let robots = "User-Agent: *\nAllow: /\n\n";
        assert_eq!(minify(robots.into(), Format::Text, &config(true)), robots);
    }
}
