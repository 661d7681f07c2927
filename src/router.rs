//! URL path → route → response.
//!
//! | Path               | Route           |
//! |--------------------|-----------------|
//! | `/`                | `Home`          |
//! | `/about`           | `About`         |
//! | `/blog`            | `BlogIndex`     |
//! | `/blog/<id>`       | `BlogPost`      |
//! | `/products`        | `ProductsIndex` |
//! | `/products/<id>`   | `Product`       |
//! | `/robots.txt`      | `Robots`        |
//! | `[build.sitemap]`  | `Sitemap`       |
//! | `[build.rss]`      | `Feed`          |
//!
//! Unknown record ids still resolve to `BlogPost`/`Product` and render the
//! not-found page with status 200. Anything else is `NotFound` (404).

use crate::{
    config::SiteConfig,
    data,
    generator::{render_feed, render_robots, render_sitemap},
    pages,
    utils::minify::{Format, minify},
};
use anyhow::Result;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    BlogIndex,
    BlogPost(String),
    ProductsIndex,
    Product(String),
    Robots,
    Sitemap,
    Feed,
    NotFound,
}

/// A rendered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Route {
    /// Resolve a request path. Query string, fragment and trailing slashes are
    /// ignored; record ids are percent-decoded.
    pub fn resolve(path: &str, config: &SiteConfig) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return if path.starts_with('/') { Self::Home } else { Self::NotFound };
        }

        let build = &config.build;
        if build.sitemap.enable && config.sitemap_url_path().as_deref() == Some(trimmed) {
            return Self::Sitemap;
        }
        if build.rss.enable && config.feed_url_path().as_deref() == Some(trimmed) {
            return Self::Feed;
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["", "about"] => Self::About,
            ["", "blog"] => Self::BlogIndex,
            ["", "products"] => Self::ProductsIndex,
            ["", "robots.txt"] if build.robots.enable => Self::Robots,
            ["", "blog", id] if !id.is_empty() => Self::BlogPost(decode(id)),
            ["", "products", id] if !id.is_empty() => Self::Product(decode(id)),
            _ => Self::NotFound,
        }
    }

    /// Site-relative path of the route; `None` for `NotFound`.
    pub fn path(&self, config: &SiteConfig) -> Option<String> {
        Some(match self {
            Self::Home => "/".into(),
            Self::About => "/about".into(),
            Self::BlogIndex => "/blog".into(),
            Self::BlogPost(id) => format!("/blog/{}", urlencoding::encode(id)),
            Self::ProductsIndex => "/products".into(),
            Self::Product(id) => format!("/products/{}", urlencoding::encode(id)),
            Self::Robots => "/robots.txt".into(),
            Self::Sitemap => return config.sitemap_url_path(),
            Self::Feed => return config.feed_url_path(),
            Self::NotFound => return None,
        })
    }

    /// Every HTML page with a known record, in sitemap order.
    pub fn pages() -> Vec<Self> {
        let mut routes = vec![Self::Home, Self::About, Self::BlogIndex, Self::ProductsIndex];
        routes.extend(data::posts().iter().map(|p| Self::BlogPost(p.id.into())));
        routes.extend(data::products().iter().map(|p| Self::Product(p.id.into())));
        routes
    }

    /// Render to a response body, minified per `[build] minify`.
    pub fn render(&self, config: &SiteConfig) -> Result<Response> {
        let page = match self {
            Self::Home => pages::home(config),
            Self::About => pages::about(config),
            Self::BlogIndex => pages::blog_index(config),
            Self::BlogPost(id) => pages::blog_post(config, id)?,
            Self::ProductsIndex => pages::products_index(config),
            Self::Product(id) => pages::product(config, id)?,
            Self::Robots => {
                return Ok(Response::ok(TEXT, minify(render_robots(config), Format::Text, config)));
            }
            Self::Sitemap => {
                return Ok(Response::ok(XML, minify(render_sitemap(config), Format::Xml, config)));
            }
            Self::Feed => {
                let feed = minify(render_feed(config)?, Format::Xml, config);
                return Ok(Response::ok(RSS, feed));
            }
            Self::NotFound => {
                return Ok(Response {
                    status: 404,
                    content_type: TEXT,
                    body: "404 Not Found".into(),
                });
            }
        };

        let html = page.render(config)?;
        Ok(Response::ok(HTML, minify(html, Format::Html, config)))
    }
}

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";
const XML: &str = "application/xml; charset=utf-8";
const RSS: &str = "application/rss+xml; charset=utf-8";

impl Response {
    fn ok(content_type: &'static str, body: String) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }
}

/// Percent-decode an id segment; undecodable input is kept raw.
fn decode(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_owned(), Cow::into_owned)
}
