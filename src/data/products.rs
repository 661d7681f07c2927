//! Product catalog.

/// A catalog entry.
///
/// `price` and `rating` are displayed with `f64`'s shortest round-trip
/// formatting, so `999.0` renders as `999` and `4.9` as `4.9`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub category: &'static str,
    pub brand: &'static str,
    pub in_stock: bool,
    pub rating: f64,
    pub reviews: u32,
}

impl Product {
    /// Site-relative path, e.g. `/products/laptop-pro`.
    pub fn path(&self) -> String {
        format!("/products/{}", self.id)
    }

    /// `$999`
    pub fn price_display(&self) -> String {
        format!("${}", self.price)
    }

    /// `4.9`
    pub fn rating_display(&self) -> String {
        self.rating.to_string()
    }

    pub const fn availability(&self) -> &'static str {
        if self.in_stock { "In Stock" } else { "Out of Stock" }
    }
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "laptop-pro",
        name: "Laptop Pro 13\"",
        price: 999.0,
        description: "High-performance laptop perfect for developers and professionals.",
        features: &[
            "13-inch Retina display",
            "24GB RAM",
            "512GB SSD",
            "M1 Chip",
            "All-day battery life",
        ],
        category: "Electronics",
        brand: "MelaCorp",
        in_stock: true,
        rating: 4.9,
        reviews: 999,
    },
    Product {
        id: "wireless-headphones",
        name: "Wireless Headphones",
        price: 299.0,
        description: "Premium wireless headphones with active noise cancellation.",
        features: &[
            "Active noise cancellation",
            "All-day battery life",
            "Quick charge",
            "Premium sound quality",
            "Comfortable fit",
        ],
        category: "Audio",
        brand: "MelaCorp",
        in_stock: true,
        rating: 4.9,
        reviews: 299,
    },
    Product {
        id: "smart-watch",
        name: "Smart Watch Series 11",
        price: 399.0,
        description: "Advanced smartwatch with health monitoring and fitness tracking.",
        features: &[
            "Heart rate monitoring",
            "GPS tracking",
            "Water resistant",
            "All-day battery life",
            "Customizable watch faces",
        ],
        category: "Wearables",
        brand: "MelaCorp",
        in_stock: false,
        rating: 4.9,
        reviews: 399,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_matches_field() {
        for product in PRODUCTS {
            let display = product.price_display();
            let parsed: f64 = display.trim_start_matches('$').parse().unwrap();
            assert_eq!(parsed, product.price);
        }
        assert_eq!(PRODUCTS[0].price_display(), "$999");
    }

    #[test]
    fn test_price_display_fractional() {
        let product = Product {
            price: 19.99,
            ..PRODUCTS[0]
        };
        assert_eq!(product.price_display(), "$19.99");
    }

    #[test]
    fn test_rating_display_matches_field() {
        for product in PRODUCTS {
            assert_eq!(product.rating_display().parse::<f64>().unwrap(), product.rating);
        }
        assert_eq!(PRODUCTS[1].rating_display(), "4.9");
    }

    #[test]
    fn test_availability() {
        assert_eq!(PRODUCTS[0].availability(), "In Stock");
        assert_eq!(PRODUCTS[2].availability(), "Out of Stock");
    }

    #[test]
    fn test_name_keeps_inch_mark() {
        assert_eq!(PRODUCTS[0].name, "Laptop Pro 13\"");
    }
}
