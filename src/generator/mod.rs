//! Crawler-facing files: robots.txt, sitemap and the blog feed.

mod feed;
mod robots;
mod sitemap;

pub use feed::render_feed;
pub use robots::render_robots;
pub use sitemap::render_sitemap;
