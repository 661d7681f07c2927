//! Blog listing and post pages.

use super::{Page, breadcrumb, not_found};
use crate::{
    config::SiteConfig,
    data::{self, Post},
    meta::{self, jsonld},
    utils::html::escape,
};
use anyhow::Result;

pub fn blog_index(config: &SiteConfig) -> Page {
    let cards: String = data::posts().iter().map(post_card).collect();

    Page {
        path: "/blog".into(),
        metadata: meta::blog_index(config),
        main: format!(
            r#"<main class="bg-white grid place-content-top">
  <section>
    <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
      <div class="max-w-prose">
        <h1 class="text-2xl font-semibold text-gray-900 sm:text-3xl">Blog</h1>
        <p class="mt-4 text-pretty text-gray-700">This page demonstrates a static route with dynamic content that links to individual blog posts.</p>
      </div>
      <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 mt-8">{cards}</div>
    </div>
  </section>
</main>"#
        ),
    }
}

fn post_card(post: &Post) -> String {
    format!(
        r#"
<article>
  <a href="{href}" class="block rounded-md border border-gray-300 p-4 shadow-sm sm:p-6">
    <h2 class="text-lg font-medium text-pretty text-gray-900">{title}</h2>
    <p class="mt-4 line-clamp-2 text-sm text-pretty text-gray-700">{excerpt}</p>
    <div class="mt-6 flex gap-4 lg:gap-6">
      <span class="text-xs text-gray-700">By {author}</span>
      <time class="text-xs text-gray-700" datetime="{date}">{display_date}</time>
    </div>
  </a>
</article>"#,
        href = post.path(),
        title = escape(post.title),
        excerpt = escape(post.excerpt),
        author = escape(post.author),
        date = escape(post.date),
        display_date = escape(&post.display_date()),
    )
}

/// `/blog/<id>`. Unknown ids render the not-found body with fallback metadata.
pub fn blog_post(config: &SiteConfig, id: &str) -> Result<Page> {
    let post = data::find_post(id);
    let metadata = meta::post(config, id, post);
    let path = format!("/blog/{id}");

    let Some(post) = post else {
        return Ok(Page {
            path,
            metadata,
            main: not_found(meta::POST_NOT_FOUND),
        });
    };

    let script = jsonld::to_script(&jsonld::blog_posting(post, config))?;
    let trail = breadcrumb(("/blog", "Blog"), (&path, post.title));

    Ok(Page {
        main: format!(
            r#"<main class="bg-white min-h-screen">
{script}
  <section>
    <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
      {trail}
      <article>
        <header class="mb-8">
          <h1 class="text-4xl font-bold mb-4 text-gray-900">{title}</h1>
          <p class="mt-4 text-pretty text-gray-600">By {author} • <time datetime="{date}">{display_date}</time></p>
          <p class="mt-4 text-pretty text-gray-700">{excerpt}</p>
        </header>
        <div class="prose max-w-none">{content}</div>
      </article>
    </div>
  </section>
</main>"#,
            title = escape(post.title),
            author = escape(post.author),
            date = escape(post.date),
            display_date = escape(&post.display_date()),
            excerpt = escape(post.excerpt),
            content = post.content,
        ),
        path,
        metadata,
    })
}
