//! `[base]` section configuration.
//!
//! Site identity: name, default description, canonical origin and language.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in seokit.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "NextSEO"
/// description = "Learn more about Next.js SEO techniques and best practices."
/// url = "https://nextseo.com"
/// language = "en"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site name, used in page titles ("Blog - NextSEO") and as JSON-LD publisher.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Site description, used by the RSS channel and the about page.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Origin every canonical URL is built on, e.g. "https://nextseo.com".
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for site footer.
    #[serde(default)]
    pub copyright: String,
}
