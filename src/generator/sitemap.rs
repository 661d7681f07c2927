//! Sitemap generation.
//!
//! Lists every page route by canonical URL; posts carry their publication
//! date as `lastmod`.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://nextseo.com/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, data, router::Route};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render sitemap.xml for every page route.
pub fn render_sitemap(config: &SiteConfig) -> String {
    Sitemap::from_routes(&Route::pages(), config).into_xml()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    /// `YYYY-MM-DD`
    lastmod: Option<String>,
}

impl Sitemap {
    fn from_routes(routes: &[Route], config: &SiteConfig) -> Self {
        let urls = routes
            .iter()
            .filter_map(|route| {
                let path = route.path(config)?;
                let lastmod = match route {
                    Route::BlogPost(id) => data::find_post(id)
                        .and_then(|post| post.parsed_date())
                        .map(|date| date.to_string()),
                    _ => None,
                };
                Some(UrlEntry {
                    loc: config.url_for(&path),
                    lastmod,
                })
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 96);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("https://nextseo.com/"), "https://nextseo.com/");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<'\">"), "&lt;&apos;&quot;&gt;");
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let xml = render_sitemap(&SiteConfig::default());

        for path in ["/", "/about", "/blog", "/products"] {
            assert!(xml.contains(&format!("<loc>https://nextseo.com{path}</loc>")));
        }
        for post in data::posts() {
            assert!(xml.contains(&format!("<loc>https://nextseo.com/blog/{}</loc>", post.id)));
        }
        for product in data::products() {
            assert!(xml.contains(&format!(
                "<loc>https://nextseo.com/products/{}</loc>",
                product.id
            )));
        }
        let expected = 4 + data::posts().len() + data::products().len();
        assert_eq!(xml.matches("<url>").count(), expected);
    }

    #[test]
    fn test_sitemap_lastmod_only_for_posts() {
        let xml = render_sitemap(&SiteConfig::default());
        assert_eq!(xml.matches("<lastmod>2026-01-01</lastmod>").count(), data::posts().len());
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = render_sitemap(&SiteConfig::default());
        let lines: Vec<&str> = xml.lines().collect();

        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(lines.last().copied(), Some("</urlset>"));
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::from_routes(&[], &SiteConfig::default()).into_xml();
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }
}
