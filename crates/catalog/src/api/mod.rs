//! Remote catalog service access.
//!
//! The service is consumed as a black box: [`CatalogApi`] names the four
//! operations the controller needs, [`HttpCatalogApi`] is the production
//! transport, and tests substitute scripted implementations.

mod http;

pub use http::HttpCatalogApi;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use shopglass_core::{ProductId, StarRating, UserId};

use crate::types::{Product, RatingSummary};

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection errors and timeouts included).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Operations exposed by the remote catalog service.
///
/// The controller is generic over this trait; anything `Send + Sync` that
/// can answer these four calls can stand in for the real service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product collection, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Add a product to the user's cart. The response body is opaque;
    /// callers re-fetch the catalog for the post-add state.
    async fn add_to_cart(&self, user: &UserId, product: &ProductId) -> Result<(), ApiError>;

    /// Submit a star rating and return the authoritative new aggregate.
    async fn rate_product(
        &self,
        user: &UserId,
        product: &ProductId,
        rating: StarRating,
    ) -> Result<RatingSummary, ApiError>;

    /// Delete a product. The response body is opaque; callers re-fetch the
    /// catalog for the post-delete state.
    async fn delete_product(&self, product: &ProductId) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for Arc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn add_to_cart(&self, user: &UserId, product: &ProductId) -> Result<(), ApiError> {
        (**self).add_to_cart(user, product).await
    }

    async fn rate_product(
        &self,
        user: &UserId,
        product: &ProductId,
        rating: StarRating,
    ) -> Result<RatingSummary, ApiError> {
        (**self).rate_product(user, product, rating).await
    }

    async fn delete_product(&self, product: &ProductId) -> Result<(), ApiError> {
        (**self).delete_product(product).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 404,
            message: "product not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - product not found");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ApiError::Parse("expected an array".to_string());
        assert_eq!(err.to_string(), "Parse error: expected an array");
    }
}
