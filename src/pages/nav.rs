//! Site header with the global navigation.

/// `(href, label)` in display order.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/products", "Products"),
    ("/blog", "Blog"),
];

const ACTIVE_CLASS: &str = "text-gray-900 font-medium";
const INACTIVE_CLASS: &str = "text-gray-500 transition hover:text-gray-500/75";

const LOGO: &str = r#"<svg class="h-8" viewBox="0 0 28 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><path d="M0.41 10.3847C1.14777 7.4194 2.85643 4.7861 5.2639 2.90424C7.6714 1.02234 10.6393 0 13.695 0C16.7507 0 19.7186 1.02234 22.1261 2.90424C24.5336 4.7861 26.2422 7.4194 26.98 10.3847H25.78C23.7557 10.3549 21.7729 10.9599 20.11 12.1147C20.014 12.1842 19.9138 12.2477 19.81 12.3047H19.67C19.5662 12.2477 19.466 12.1842 19.37 12.1147C17.6924 10.9866 15.7166 10.3841 13.695 10.3841C11.6734 10.3841 9.6976 10.9866 8.02 12.1147C7.924 12.1842 7.8238 12.2477 7.72 12.3047H7.58C7.4762 12.2477 7.376 12.1842 7.28 12.1147C5.6171 10.9599 3.6343 10.3549 1.61 10.3847H0.41Z" fill="currentColor"/></svg>"#;

/// `true` when `href` is the page being rendered. Exact match only, so
/// `/blog` is not active on `/blog/<id>`.
pub fn is_active(href: &str, current: &str) -> bool {
    href == current
}

/// Render the header for the page at `current`.
pub fn render(current: &str) -> String {
    let items: String = NAV_ITEMS
        .iter()
        .map(|&(href, label)| {
            let (class, aria) = if is_active(href, current) {
                (ACTIVE_CLASS, r#" aria-current="page""#)
            } else {
                (INACTIVE_CLASS, "")
            };
            format!(r#"<li><a class="{class}" href="{href}"{aria}>{label}</a></li>"#)
        })
        .collect();

    format!(
        r#"<header class="bg-white">
  <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
    <div class="flex h-16 items-center justify-between">
      <div class="flex-1 md:flex md:items-center md:gap-12">
        <a class="block text-indigo-600" href="/"><span class="sr-only">Home</span>{LOGO}</a>
      </div>
      <div class="md:flex md:items-center md:gap-12">
        <nav aria-label="Global">
          <ul class="flex items-center gap-6 text-sm">{items}</ul>
        </nav>
      </div>
    </div>
  </div>
</header>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_on_nav_routes() {
        for (href, _) in NAV_ITEMS {
            let html = render(href);
            assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
            assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
            assert!(html.contains(&format!(
                r#"<a class="{ACTIVE_CLASS}" href="{href}" aria-current="page">"#
            )));
        }
    }

    #[test]
    fn test_detail_routes_have_no_active_item() {
        for path in ["/blog/seo-best-practices", "/products/laptop-pro", "/missing"] {
            let html = render(path);
            assert!(!html.contains("aria-current"));
            assert_eq!(html.matches(INACTIVE_CLASS).count(), NAV_ITEMS.len());
        }
    }

    #[test]
    fn test_is_active_exact_match() {
        assert!(is_active("/", "/"));
        assert!(is_active("/blog", "/blog"));
        assert!(!is_active("/", "/blog"));
        assert!(!is_active("/blog", "/blog/"));
        assert!(!is_active("/products", "/products/smart-watch"));
    }

    #[test]
    fn test_items_in_order() {
        let html = render("/");
        let positions: Vec<_> = ["Home</a>", "About</a>", "Products</a>", "Blog</a>"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
