//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "NextSEO".into()
    }

    pub fn description() -> String {
        "Learn more about Next.js SEO techniques and best practices.".into()
    }

    pub fn url() -> String {
        "https://nextseo.com".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [seo] Section Defaults
// ============================================================================

pub mod seo {
    pub fn locale() -> String {
        "en_US".into()
    }

    pub fn social_title() -> String {
        "Next.js SEO".into()
    }

    pub fn social_description() -> String {
        "Master metadata, robots, sitemaps, and more.".into()
    }

    pub fn twitter_creator() -> Option<String> {
        Some("@eneax".into())
    }

    pub fn image() -> Option<String> {
        Some("https://nextseo.com/seo.png".into())
    }

    pub fn store() -> String {
        "Metadata Course Store".into()
    }

    pub fn currency() -> String {
        "USD".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod robots {
        use crate::config::RobotsRule;

        /// All crawlers may visit everything but `/api/`; Googlebot is
        /// additionally kept out of the terms page.
        pub fn rules() -> Vec<RobotsRule> {
            vec![
                RobotsRule {
                    user_agent: "*".into(),
                    allow: vec!["/".into()],
                    disallow: vec!["/api/".into()],
                },
                RobotsRule {
                    user_agent: "Googlebot".into(),
                    allow: vec!["/".into()],
                    disallow: vec!["/terms-and-conditions/".into()],
                },
            ]
        }
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
