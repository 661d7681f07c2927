//! Sample records backing the site.
//!
//! Two fixed lists stand in for a data source: blog posts and products.
//! Both are `'static` slices, read-only for the lifetime of the process,
//! and looked up by identifier only.
//!
//! # Lookup
//!
//! ```text
//! "/blog/<id>"     ──► find_post(id)    ──► Some(&Post)    | None
//! "/products/<id>" ──► find_product(id) ──► Some(&Product) | None
//! ```
//!
//! A lookup is a linear scan with exact string equality; the first match wins.
//! `None` is not an error: pages render their not-found fallback instead.

mod posts;
mod products;

pub use posts::{POSTS, Post};
pub use products::{PRODUCTS, Product};

/// All blog posts, in display order.
#[inline]
pub fn posts() -> &'static [Post] {
    POSTS
}

/// All products, in display order.
#[inline]
pub fn products() -> &'static [Product] {
    PRODUCTS
}

/// Find a post by its identifier (the `/blog/<id>` segment).
pub fn find_post(id: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id == id)
}

/// Find a product by its identifier (the `/products/<id>` segment).
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}
