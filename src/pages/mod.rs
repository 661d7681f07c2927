//! HTML pages.
//!
//! Each page function returns a [`Page`]: the markup that goes inside
//! `<main>` plus the metadata for `<head>`. [`Page::render`] wraps both in
//! the shared layout.

mod blog;
mod home;
pub mod nav;
mod products;

pub use blog::{blog_index, blog_post};
pub use home::{about, home};
pub use products::{product, products_index};

use crate::{config::SiteConfig, meta, meta::Metadata, utils::html::escape};
use anyhow::Result;

const LAYOUT: &str = include_str!("../embed/layout.html");

/// A rendered route before layout.
#[derive(Debug, Clone)]
pub struct Page {
    /// Request path, used for nav highlighting.
    pub path: String,
    pub metadata: Metadata,
    pub main: String,
}

impl Page {
    /// Full HTML document.
    pub fn render(&self, config: &SiteConfig) -> Result<String> {
        let head = meta::write_head(&self.metadata, config)?;
        let lang = escape(&config.base.language);
        let nav = nav::render(&self.path);
        let footer = footer(config);

        Ok(fill_layout(&[
            ("lang", &lang),
            ("head", &head),
            ("nav", &nav),
            ("main", &self.main),
            ("footer", &footer),
        ]))
    }
}

/// Fill the `{slot}` placeholders of the layout in one pass. Inserted
/// values are never rescanned, so braces in titles or page markup stay
/// literal.
fn fill_layout(slots: &[(&str, &str)]) -> String {
    let capacity = LAYOUT.len() + slots.iter().map(|(_, value)| value.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = LAYOUT;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let slot = tail.find('}').and_then(|end| {
            let name = &tail[..end];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (end, *value))
        });
        match slot {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn footer(config: &SiteConfig) -> String {
    if config.base.copyright.is_empty() {
        return String::new();
    }
    format!(
        r#"<footer class="mx-auto max-w-7xl px-4 py-8 text-xs text-gray-500 sm:px-6 lg:px-8"><p>{}</p></footer>"#,
        escape(&config.base.copyright)
    )
}

/// Not-found body for a detail route.
fn not_found((title, message): (&str, &str)) -> String {
    format!(
        r#"<div class="container mx-auto px-4 py-8">
  <h1 class="text-4xl font-bold mb-6">{title}</h1>
  <p>{message}</p>
</div>"#
    )
}

const CHEVRON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="size-4" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M7.293 14.707a1 1 0 010-1.414L10.586 10 7.293 6.707a1 1 0 011.414-1.414l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414 0z" clip-rule="evenodd"></path></svg>"#;

/// `Section › Item` trail above a detail page.
fn breadcrumb(section: (&str, &str), item: (&str, &str)) -> String {
    let link = |(href, label): (&str, &str)| {
        format!(
            r#"<li><a href="{href}" class="block transition-colors hover:text-gray-900">{}</a></li>"#,
            escape(label)
        )
    };
    format!(
        r#"<nav aria-label="Breadcrumb" class="mb-6">
  <ol class="flex items-center gap-1 text-sm text-gray-700">{}<li class="rtl:rotate-180">{CHEVRON}</li>{}</ol>
</nav>"#,
        link(section),
        link(item)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str, main: &str) -> Page {
        Page {
            path: path.into(),
            metadata: Metadata {
                title: "T".into(),
                ..Default::default()
            },
            main: main.into(),
        }
    }

    #[test]
    fn test_render_document() {
        let config = SiteConfig::default();
        let html = page("/about", "<main>{nav}</main>").render(&config).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>T</title>"));
        assert!(html.contains(r#"href="/about" aria-current="page""#));
        // placeholders inside page markup stay literal
        assert!(html.contains("<main>{nav}</main>"));
        assert!(!html.contains("<footer"));
    }

    #[test]
    fn test_head_values_are_not_expanded() {
        let mut config = SiteConfig::default();
        config.base.copyright = "{head}".into();
        let mut page = page("/", "<p>body</p>");
        page.metadata.title = "{nav} {main} {footer}".into();
        page.metadata.description = "{lang}".into();
        let html = page.render(&config).unwrap();

        assert!(html.contains("<title>{nav} {main} {footer}</title>"));
        assert!(html.contains(r#"<meta name="description" content="{lang}"/>"#));
        assert_eq!(html.matches("<p>body</p>").count(), 1);
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches("<head>").count(), 1);
        assert!(html.contains("<p>{head}</p>"));
    }

    #[test]
    fn test_fill_layout_keeps_unknown_braces() {
        let html = fill_layout(&[("lang", "de")]);

        assert!(html.contains(r#"<html lang="de">"#));
        assert!(html.contains("{head}"));
        assert!(html.contains("{main}"));
    }

    #[test]
    fn test_footer_copyright() {
        let mut config = SiteConfig::default();
        config.base.copyright = "© 2026 NextSEO & co".into();
        let html = page("/", "").render(&config).unwrap();

        assert!(html.contains("<footer"));
        assert!(html.contains("© 2026 NextSEO &amp; co"));
    }

    #[test]
    fn test_breadcrumb_escapes_label() {
        let html = breadcrumb(("/products", "Products"), ("/products/laptop-pro", "Laptop Pro 13\""));

        assert!(html.contains(r#"<a href="/products" "#));
        assert!(html.contains("Laptop Pro 13&quot;"));
        assert!(html.contains(r#"aria-label="Breadcrumb""#));
    }
}
