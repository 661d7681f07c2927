//! RSS feed of the blog.

use crate::{config::SiteConfig, data, data::Post};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};

/// Render the RSS 2.0 channel with one item per post.
pub fn render_feed(config: &SiteConfig) -> Result<String> {
    let items: Vec<Item> = data::posts().iter().map(|post| post_item(post, config)).collect();

    let channel = ChannelBuilder::default()
        .title(config.base.title.clone())
        .link(config.url_for("/blog"))
        .description(config.base.description.clone())
        .language(Some(config.base.language.clone()))
        .generator(Some(concat!("seokit ", env!("CARGO_PKG_VERSION")).to_owned()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn post_item(post: &Post, config: &SiteConfig) -> Item {
    let link = config.url_for(&post.path());

    ItemBuilder::default()
        .title(Some(post.title.to_owned()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(Some(post.excerpt.to_owned()))
        .author(Some(post.author.to_owned()))
        .pub_date(post.parsed_date().map(|date| date.to_rfc2822()))
        .build()
}
