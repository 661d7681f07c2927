//! `<head>` rendering with `quick-xml`.
//!
//! quick-xml escapes text and attribute values, so record fields can be
//! written as-is.

use super::Metadata;
use crate::config::SiteConfig;
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render `<head>…</head>` for a page.
pub fn write_head(meta: &Metadata, config: &SiteConfig) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Start(BytesStart::new("head")))?;
    write_empty_elem(&mut writer, "meta", &[("charset", "utf-8")])?;
    write_empty_elem(
        &mut writer,
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    )?;
    write_text_element(&mut writer, "title", &meta.title)?;
    write_meta_name(&mut writer, "description", &meta.description)?;

    if !meta.keywords.is_empty() {
        write_meta_name(&mut writer, "keywords", &meta.keywords.join(","))?;
    }
    for author in &meta.authors {
        write_meta_name(&mut writer, "author", author)?;
    }
    if let Some(canonical) = &meta.canonical {
        write_empty_elem(&mut writer, "link", &[("rel", "canonical"), ("href", canonical)])?;
    }

    if let Some(og) = &meta.open_graph {
        write_meta_property(&mut writer, "og:title", &og.title)?;
        write_meta_property(&mut writer, "og:description", &og.description)?;
        write_meta_property(&mut writer, "og:site_name", &og.site_name)?;
        write_meta_property(&mut writer, "og:locale", &og.locale)?;
        write_meta_property(&mut writer, "og:type", og.kind)?;
        if let Some(canonical) = &meta.canonical {
            write_meta_property(&mut writer, "og:url", canonical)?;
        }
        for image in &og.images {
            write_meta_property(&mut writer, "og:image", image)?;
        }
    }

    if let Some(card) = &meta.twitter {
        write_meta_name(&mut writer, "twitter:card", card.card)?;
        write_meta_name(&mut writer, "twitter:title", &card.title)?;
        write_meta_name(&mut writer, "twitter:description", &card.description)?;
        if let Some(creator) = &card.creator {
            write_meta_name(&mut writer, "twitter:creator", creator)?;
        }
        for image in &card.images {
            write_meta_name(&mut writer, "twitter:image", image)?;
        }
    }

    if let Some(robots) = &meta.robots {
        write_meta_name(&mut writer, "robots", &robots.content())?;
        if let Some(googlebot) = &robots.googlebot {
            write_meta_name(&mut writer, "googlebot", &googlebot.content())?;
        }
    }

    if config.build.rss.enable
        && let Some(feed) = config.feed_url_path()
    {
        write_empty_elem(
            &mut writer,
            "link",
            &[
                ("rel", "alternate"),
                ("type", "application/rss+xml"),
                ("title", &config.base.title),
                ("href", &feed),
            ],
        )?;
    }

    writer.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// `<tag>text</tag>`
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// `<tag attr="value" ... />`
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for &(key, value) in attrs {
        elem.push_attribute((key, value));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

#[inline]
fn write_meta_name(writer: &mut XmlWriter, name: &str, content: &str) -> Result<()> {
    write_empty_elem(writer, "meta", &[("name", name), ("content", content)])
}

#[inline]
fn write_meta_property(writer: &mut XmlWriter, property: &str, content: &str) -> Result<()> {
    write_empty_elem(writer, "meta", &[("property", property), ("content", content)])
}
