//! Product listing and detail pages.

use super::{Page, breadcrumb, not_found};
use crate::{
    config::SiteConfig,
    data::{self, Product},
    meta::{self, jsonld},
    utils::html::escape,
};
use anyhow::Result;

pub fn products_index(config: &SiteConfig) -> Page {
    let cards: String = data::products().iter().map(product_card).collect();

    Page {
        path: "/products".into(),
        metadata: meta::products_index(config),
        main: format!(
            r#"<main class="bg-white grid place-content-top">
  <section>
    <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
      <div class="max-w-prose">
        <h1 class="text-2xl font-semibold text-gray-900 sm:text-3xl">Products</h1>
        <p class="mt-4 text-pretty text-gray-700">Discover our range of products! This page demonstrates a product listing with links to individual product pages.</p>
      </div>
      <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 mt-8">{cards}</div>
    </div>
  </section>
</main>"#
        ),
    }
}

fn stock_badge(product: &Product) -> String {
    let class = if product.in_stock {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    };
    format!(
        r#"<span class="px-2 py-1 rounded-full text-xs {class}">{}</span>"#,
        product.availability()
    )
}

fn product_card(product: &Product) -> String {
    format!(
        r#"
<a href="{href}" class="block rounded-md border border-gray-300 p-4 shadow-sm sm:p-6">
  <h2 class="text-lg font-medium text-pretty text-gray-900">{name}</h2>
  <p class="mt-4 line-clamp-2 text-sm text-pretty text-gray-700">{description}</p>
  <div class="mt-6 flex gap-4 lg:gap-6">
    <span class="text-xs text-gray-700">{price}</span>
    {badge}
    <span class="text-yellow-500">★</span><span class="text-xs text-gray-700">{rating}</span>
    <span class="text-xs text-gray-700">({reviews} reviews)</span>
  </div>
</a>"#,
        href = product.path(),
        name = escape(product.name),
        description = escape(product.description),
        price = product.price_display(),
        badge = stock_badge(product),
        rating = product.rating_display(),
        reviews = product.reviews,
    )
}

/// One `<dt>/<dd>` row of the product details list.
fn detail_row(term: &str, value: &str) -> String {
    format!(
        r#"
<div class="grid grid-cols-1 gap-1 py-3 sm:grid-cols-3 sm:gap-4">
  <dt class="font-medium text-gray-900">{term}</dt>
  <dd class="text-gray-700 sm:col-span-2">{value}</dd>
</div>"#
    )
}

/// `/products/<id>`. Unknown ids render the not-found body with fallback metadata.
pub fn product(config: &SiteConfig, id: &str) -> Result<Page> {
    let product = data::find_product(id);
    let metadata = meta::product(config, id, product);
    let path = format!("/products/{id}");

    let Some(product) = product else {
        return Ok(Page {
            path,
            metadata,
            main: not_found(meta::PRODUCT_NOT_FOUND),
        });
    };

    let script = jsonld::to_script(&jsonld::product(product, config))?;
    let trail = breadcrumb(("/products", "Products"), (&path, product.name));
    let features: String = product
        .features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape(feature)))
        .collect();
    let details = [
        detail_row("Brand", &escape(product.brand)),
        detail_row("Category", &escape(product.category)),
        detail_row("Price", &product.price_display()),
        detail_row("Availability", product.availability()),
        detail_row("Rating", &format!("{} / 5", product.rating_display())),
        detail_row("Reviews", &product.reviews.to_string()),
        detail_row(
            "Features",
            &format!(r#"<ul class="list-disc pl-5 space-y-1">{features}</ul>"#),
        ),
    ]
    .concat();

    Ok(Page {
        main: format!(
            r#"<main class="bg-white grid place-content-top">
{script}
  <section>
    <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
      {trail}
      <div class="space-y-4 md:space-y-8">
        <div class="max-w-prose">
          <h1 class="text-2xl font-semibold text-gray-900 sm:text-3xl">{name}</h1>
          <p class="mt-4 text-pretty text-gray-700">{description}</p>
        </div>
        <div class="flow-root">
          <dl class="-my-3 divide-y divide-gray-200 text-sm">{details}</dl>
        </div>
      </div>
    </div>
  </section>
</main>"#,
            name = escape(product.name),
            description = escape(product.description),
        ),
        path,
        metadata,
    })
}
