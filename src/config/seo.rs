//! `[seo]` section configuration.
//!
//! Site-wide values shared by the social cards (Open Graph, Twitter) and
//! the structured data payloads.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[seo]` section in seokit.toml.
///
/// # Example
/// ```toml
/// [seo]
/// locale = "en_US"
/// social_title = "Next.js SEO"
/// social_description = "Master metadata, robots, sitemaps, and more."
/// twitter_creator = "@eneax"
/// image = "https://nextseo.com/seo.png"
/// store = "Metadata Course Store"
/// currency = "USD"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// `og:locale`
    #[serde(default = "defaults::seo::locale")]
    #[educe(Default = defaults::seo::locale())]
    pub locale: String,

    /// Title used on social cards of the landing pages.
    #[serde(default = "defaults::seo::social_title")]
    #[educe(Default = defaults::seo::social_title())]
    pub social_title: String,

    /// Description used on social cards of the landing pages.
    #[serde(default = "defaults::seo::social_description")]
    #[educe(Default = defaults::seo::social_description())]
    pub social_description: String,

    /// `twitter:creator` handle.
    #[serde(default = "defaults::seo::twitter_creator")]
    #[educe(Default = defaults::seo::twitter_creator())]
    pub twitter_creator: Option<String>,

    /// Share image for `og:image` / `twitter:image`.
    #[serde(default = "defaults::seo::image")]
    #[educe(Default = defaults::seo::image())]
    pub image: Option<String>,

    /// Seller organization named in product offers.
    #[serde(default = "defaults::seo::store")]
    #[educe(Default = defaults::seo::store())]
    pub store: String,

    /// ISO 4217 currency of product prices.
    #[serde(default = "defaults::seo::currency")]
    #[educe(Default = defaults::seo::currency())]
    pub currency: String,
}
