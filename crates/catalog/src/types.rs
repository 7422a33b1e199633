//! Product records and rating aggregates as the catalog service ships them.
//!
//! Field names follow the service's wire format (camelCase, MongoDB-style
//! `_id`); the serde attributes keep the Rust side idiomatic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopglass_core::ProductId;

/// Placeholder image reference used when a product record carries none.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/images/product-placeholder.webp";

/// One product record, mirrored from the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Service-assigned identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// List price.
    pub price: Decimal,
    /// Discount badge percentage in [0, 100]; 0 means no badge.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Effective sale price when present and > 0; must be <= `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
    /// Units in stock; 0 means sold out.
    pub quantity: u32,
    /// Persisted average rating in [0, 5].
    #[serde(default)]
    pub stars: f64,
    /// Number of ratings received. Some service responses call this `votes`.
    #[serde(default, alias = "votes")]
    pub ratings_count: u32,
    /// Image reference; see [`Product::image_url`] for the display fallback.
    #[serde(default, rename = "imgURL", skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

impl Product {
    /// Image reference to display, falling back to the placeholder.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.img_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_IMAGE)
    }

    /// Whether the product is out of stock.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }

    /// Whether a sale price applies.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discounted_price.is_some_and(|p| p > Decimal::ZERO)
    }

    /// The price a buyer pays: sale price when discounted, list price
    /// otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        match self.discounted_price {
            Some(discounted) if discounted > Decimal::ZERO => discounted,
            _ => self.price,
        }
    }
}

/// Authoritative rating aggregate returned after a rating is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// New average rating in [0, 5].
    pub stars: f64,
    /// New total number of ratings.
    #[serde(alias = "votes")]
    pub ratings_count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "_id": "6717b2f7",
            "name": "Enamel Mug",
            "category": "kitchen",
            "price": 18.5,
            "discountPercentage": 20,
            "discountedPrice": 14.8,
            "quantity": 12,
            "stars": 4.2,
            "ratingsCount": 31,
            "imgURL": "/images/enamel-mug.webp"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("6717b2f7"));
        assert_eq!(product.name, "Enamel Mug");
        assert_eq!(product.price, "18.5".parse::<Decimal>().unwrap());
        assert_eq!(
            product.discounted_price,
            Some("14.8".parse::<Decimal>().unwrap())
        );
        assert_eq!(product.quantity, 12);
        assert_eq!(product.ratings_count, 31);
        assert_eq!(product.img_url.as_deref(), Some("/images/enamel-mug.webp"));
    }

    #[test]
    fn test_deserialize_minimal_record_defaults() {
        let json = r#"{
            "_id": "p2",
            "name": "Plain Tee",
            "category": "apparel",
            "price": 9,
            "quantity": 3
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!((product.discount_percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(product.discounted_price, None);
        assert!((product.stars - 0.0).abs() < f64::EPSILON);
        assert_eq!(product.ratings_count, 0);
        assert_eq!(product.img_url, None);
    }

    #[test]
    fn test_deserialize_votes_alias() {
        let json = r#"{
            "_id": "p3",
            "name": "Candle",
            "category": "home",
            "price": 6,
            "quantity": 5,
            "votes": 7
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.ratings_count, 7);
    }

    #[test]
    fn test_image_url_fallback() {
        let mut product = sample();
        assert_eq!(product.image_url(), "/images/enamel-mug.webp");

        product.img_url = None;
        assert_eq!(product.image_url(), DEFAULT_PRODUCT_IMAGE);

        product.img_url = Some(String::new());
        assert_eq!(product.image_url(), DEFAULT_PRODUCT_IMAGE);
    }

    #[test]
    fn test_is_sold_out() {
        let mut product = sample();
        assert!(!product.is_sold_out());
        product.quantity = 0;
        assert!(product.is_sold_out());
    }

    #[test]
    fn test_effective_price() {
        let mut product = sample();
        assert_eq!(
            product.effective_price(),
            "14.8".parse::<Decimal>().unwrap()
        );
        assert!(product.is_discounted());

        product.discounted_price = None;
        assert_eq!(product.effective_price(), product.price);
        assert!(!product.is_discounted());

        product.discounted_price = Some(Decimal::ZERO);
        assert_eq!(product.effective_price(), product.price);
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_rating_summary_votes_alias() {
        let summary: RatingSummary =
            serde_json::from_str(r#"{"stars": 3.2, "votes": 11}"#).unwrap();
        assert_eq!(summary.ratings_count, 11);
    }

    fn sample() -> Product {
        Product {
            id: ProductId::new("6717b2f7"),
            name: "Enamel Mug".to_owned(),
            category: "kitchen".to_owned(),
            price: "18.5".parse().unwrap(),
            discount_percentage: 20.0,
            discounted_price: Some("14.8".parse().unwrap()),
            quantity: 12,
            stars: 4.2,
            ratings_count: 31,
            img_url: Some("/images/enamel-mug.webp".to_owned()),
        }
    }
}
