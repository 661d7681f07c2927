//! Page metadata: what goes into `<head>` for each route.
//!
//! Static pages (home, about, blog index, products index) carry the full set
//! of social and crawler tags. Detail pages derive title, description,
//! keywords and canonical from their record, and fall back to a fixed
//! "not found" description when the identifier is unknown.

mod head;
pub mod jsonld;

pub use head::write_head;

use crate::{
    config::SiteConfig,
    data::{Post, Product},
};

// ============================================================================
// Types
// ============================================================================

/// Everything rendered into a page's `<head>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    /// Absolute preferred URL (`<link rel="canonical">`).
    pub canonical: Option<String>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub robots: Option<RobotsMeta>,
}

/// `og:*` properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub kind: &'static str,
    pub images: Vec<String>,
}

/// `twitter:*` properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub creator: Option<String>,
    pub images: Vec<String>,
}

/// `<meta name="robots">` and its `googlebot` counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotsMeta {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub googlebot: Option<GoogleBot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// `-1` means no limit.
    pub max_snippet: i32,
    pub max_image_preview: &'static str,
    pub max_video_preview: i32,
}

impl RobotsMeta {
    /// Indexable, followable, with no snippet or preview limits.
    pub const fn open() -> Self {
        Self {
            index: true,
            follow: true,
            nocache: false,
            googlebot: Some(GoogleBot {
                index: true,
                follow: true,
                max_snippet: -1,
                max_image_preview: "large",
                max_video_preview: -1,
            }),
        }
    }

    /// `index, follow` (plus `nocache` when set).
    pub fn content(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];
        if self.nocache {
            parts.push("nocache");
        }
        parts.join(", ")
    }
}

impl GoogleBot {
    pub fn content(&self) -> String {
        format!(
            "{}, {}, max-snippet:{}, max-image-preview:{}, max-video-preview:{}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
            self.max_snippet,
            self.max_image_preview,
            self.max_video_preview,
        )
    }
}

// ============================================================================
// Static pages
// ============================================================================

const SITE_KEYWORDS: [&str; 5] = ["Next.js", "SEO", "Metadata", "Static Site", "Web Vitals"];

const ABOUT_DESCRIPTION: &str =
    "How this site handles static routes and adds metadata for search engines.";
const BLOG_DESCRIPTION: &str =
    "Discover insightful articles and updates on Next.js SEO best practices.";
const PRODUCTS_DESCRIPTION: &str =
    "Explore our product range with detailed listings and SEO-optimized pages.";

pub fn home(config: &SiteConfig) -> Metadata {
    let title = format!("Home - {}", config.base.title);
    site_page(config, title, config.base.description.clone(), None, "/")
}

pub fn about(config: &SiteConfig) -> Metadata {
    Metadata {
        title: format!("About - {}", config.base.title),
        description: ABOUT_DESCRIPTION.into(),
        canonical: Some(config.url_for("/about")),
        ..Default::default()
    }
}

pub fn blog_index(config: &SiteConfig) -> Metadata {
    let title = format!("Blog - {}", config.base.title);
    site_page(config, title, BLOG_DESCRIPTION.into(), Some("Blog"), "/blog")
}

pub fn products_index(config: &SiteConfig) -> Metadata {
    let title = format!("Products - {}", config.base.title);
    let description = PRODUCTS_DESCRIPTION.into();
    site_page(config, title, description, Some("Products"), "/products")
}

/// Landing-page metadata with social cards and open robots directives.
fn site_page(
    config: &SiteConfig,
    title: String,
    description: String,
    extra_keyword: Option<&str>,
    path: &str,
) -> Metadata {
    let seo = &config.seo;
    let images: Vec<String> = non_empty(seo.image.as_deref()).into_iter().collect();
    let mut keywords: Vec<String> = SITE_KEYWORDS.map(str::to_owned).into();
    keywords.extend(extra_keyword.map(str::to_owned));

    Metadata {
        title,
        description,
        keywords,
        authors: Vec::new(),
        canonical: Some(config.url_for(path)),
        open_graph: Some(OpenGraph {
            title: seo.social_title.clone(),
            description: seo.social_description.clone(),
            site_name: site_name(config).to_owned(),
            locale: seo.locale.clone(),
            kind: "website",
            images: images.clone(),
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image",
            title: seo.social_title.clone(),
            description: seo.social_description.clone(),
            creator: non_empty(seo.twitter_creator.as_deref()),
            images,
        }),
        robots: Some(RobotsMeta::open()),
    }
}

/// Host part of the base URL, e.g. `nextseo.com`.
pub fn site_name(config: &SiteConfig) -> &str {
    let url = config.base_url();
    url.split_once("://").map_or(url, |(_, host)| host)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

// ============================================================================
// Detail pages
// ============================================================================

pub const POST_NOT_FOUND: (&str, &str) = (
    "Post Not Found",
    "The blog post you are looking for does not exist.",
);

pub const PRODUCT_NOT_FOUND: (&str, &str) = (
    "Product Not Found",
    "The product you are looking for does not exist.",
);

/// Metadata for `/blog/<id>`; `post` is `None` when the id is unknown.
pub fn post(config: &SiteConfig, id: &str, post: Option<&Post>) -> Metadata {
    let canonical = Some(config.url_for(&format!("/blog/{}", urlencoding::encode(id))));
    let Some(post) = post else {
        return not_found(POST_NOT_FOUND, canonical);
    };

    Metadata {
        title: format!("{} | {} Blog", post.title, config.base.title),
        description: post.excerpt.into(),
        keywords: ["blog", "nextjs", "seo"]
            .into_iter()
            .map(str::to_owned)
            .chain([post.title.to_lowercase()])
            .collect(),
        authors: vec![post.author.into()],
        canonical,
        ..Default::default()
    }
}

/// Metadata for `/products/<id>`; `product` is `None` when the id is unknown.
pub fn product(config: &SiteConfig, id: &str, product: Option<&Product>) -> Metadata {
    let canonical = Some(config.url_for(&format!("/products/{}", urlencoding::encode(id))));
    let Some(product) = product else {
        return not_found(PRODUCT_NOT_FOUND, canonical);
    };

    Metadata {
        title: format!("{} - {} | {}", product.name, product.brand, config.base.title),
        description: format!(
            "{} Price: {}. {}. Rating: {}/5 stars.",
            product.description,
            product.price_display(),
            product.availability(),
            product.rating_display(),
        ),
        keywords: vec![
            product.category.into(),
            product.brand.into(),
            product.name.to_lowercase(),
        ],
        canonical,
        ..Default::default()
    }
}

fn not_found((title, description): (&str, &str), canonical: Option<String>) -> Metadata {
    Metadata {
        title: title.into(),
        description: description.into(),
        canonical,
        ..Default::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
