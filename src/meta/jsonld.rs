//! schema.org structured data for blog posts and products.

use crate::{
    config::SiteConfig,
    data::{Post, Product},
};
use anyhow::Result;
use serde::{Serialize, Serializer};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    main_entity_of_page: WebPage,
    headline: &'a str,
    description: &'a str,
    author: Named<'a>,
    publisher: Organization<'a>,
    date_published: &'a str,
    date_modified: &'a str,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    brand: Named<'a>,
    category: &'a str,
    offers: Offer<'a>,
    aggregate_rating: AggregateRating,
    additional_property: Vec<PropertyValue<'a>>,
    url: String,
}

#[derive(Debug, Serialize)]
struct WebPage {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
}

/// `Person`, `Brand` and other types that only carry a name.
#[derive(Debug, Serialize)]
struct Named<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(serialize_with = "number")]
    price: f64,
    price_currency: &'a str,
    availability: &'static str,
    seller: Organization<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateRating {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(serialize_with = "number")]
    rating_value: f64,
    review_count: u32,
    best_rating: u8,
    worst_rating: u8,
}

#[derive(Debug, Serialize)]
struct PropertyValue<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    value: &'a str,
}

/// Whole numbers serialize without a fraction (`999`, not `999.0`).
fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// `BlogPosting` for a post page.
pub fn blog_posting<'a>(post: &'a Post, config: &'a SiteConfig) -> BlogPosting<'a> {
    let url = config.url_for(&post.path());
    BlogPosting {
        context: SCHEMA_CONTEXT,
        kind: "BlogPosting",
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: url.clone(),
        },
        headline: post.title,
        description: post.excerpt,
        author: Named {
            kind: "Person",
            name: post.author,
        },
        publisher: Organization {
            kind: "Organization",
            name: &config.base.title,
            url: Some(config.base_url()),
        },
        date_published: post.date,
        date_modified: post.date,
        url,
    }
}

/// `Product` with offer, rating and one `PropertyValue` per feature.
pub fn product<'a>(product: &'a Product, config: &'a SiteConfig) -> ProductData<'a> {
    ProductData {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: product.name,
        description: product.description,
        brand: Named {
            kind: "Brand",
            name: product.brand,
        },
        category: product.category,
        offers: Offer {
            kind: "Offer",
            price: product.price,
            price_currency: &config.seo.currency,
            availability: if product.in_stock {
                "https://schema.org/InStock"
            } else {
                "https://schema.org/OutOfStock"
            },
            seller: Organization {
                kind: "Organization",
                name: &config.seo.store,
                url: None,
            },
        },
        aggregate_rating: AggregateRating {
            kind: "AggregateRating",
            rating_value: product.rating,
            review_count: product.reviews,
            best_rating: 5,
            worst_rating: 1,
        },
        additional_property: product
            .features
            .iter()
            .map(|&feature| PropertyValue {
                kind: "PropertyValue",
                name: "Feature",
                value: feature,
            })
            .collect(),
        url: config.url_for(&product.path()),
    }
}

/// `<script type="application/ld+json">` body for `data`.
///
/// `</` is written as `<\/` (same JSON string) so the payload can never
/// close the surrounding script element.
pub fn to_script<T: Serialize>(data: &T) -> Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json.replace("</", r"<\/")
    ))
}
