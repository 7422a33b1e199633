//! HTTP implementation of the catalog service client.
//!
//! Plain REST with JSON bodies. Endpoint paths are joined onto the
//! configured base URL; authentication, when configured, is a bearer token
//! in the default headers.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use shopglass_core::{ProductId, StarRating, UserId};

use crate::config::CatalogConfig;
use crate::types::{Product, RatingSummary};

use super::{ApiError, CatalogApi};

const LIST_PRODUCTS_PATH: &str = "all-products";
const ADD_TO_CART_PATH: &str = "add-to-cart";
const RATE_PRODUCT_PATH: &str = "rate-product";
const DELETE_PRODUCT_PATH: &str = "delete-product";

/// HTTP client for the remote catalog service.
///
/// Cheap to clone; the connection pool and default headers live behind an
/// `Arc`.
#[derive(Clone)]
pub struct HttpCatalogApi {
    inner: Arc<HttpCatalogApiInner>,
}

struct HttpCatalogApiInner {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogApi {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the API token
    /// is not a valid header value.
    pub fn new(config: &CatalogConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.api_token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| ApiError::Parse(format!("invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(HttpCatalogApiInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::Parse(format!("invalid endpoint {path}: {e}")))
    }

    /// URL for the delete endpoint, with the id as a dedicated path
    /// segment (ids are opaque and may need escaping).
    fn delete_endpoint(&self, product: &ProductId) -> Result<Url, ApiError> {
        let mut url = self.endpoint(DELETE_PRODUCT_PATH)?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Parse("base URL cannot carry path segments".to_string()))?
            .push(product.as_str());
        Ok(url)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint(LIST_PRODUCTS_PATH)?;
        let response = self.inner.client.get(url).send().await?;
        let products: Vec<Product> = read_json(response).await?;
        debug!(count = products.len(), "fetched product collection");
        Ok(products)
    }

    #[instrument(skip(self, user))]
    async fn add_to_cart(&self, user: &UserId, product: &ProductId) -> Result<(), ApiError> {
        let url = self.endpoint(ADD_TO_CART_PATH)?;
        let body = AddToCartRequest {
            user_id: user,
            product_id: product,
        };
        let response = self.inner.client.post(url).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn rate_product(
        &self,
        user: &UserId,
        product: &ProductId,
        rating: StarRating,
    ) -> Result<RatingSummary, ApiError> {
        let url = self.endpoint(RATE_PRODUCT_PATH)?;
        let body = RateProductRequest {
            user_id: user,
            product_id: product,
            rating,
        };
        let response = self.inner.client.post(url).json(&body).send().await?;
        read_json(response).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, product: &ProductId) -> Result<(), ApiError> {
        let url = self.delete_endpoint(product)?;
        let response = self.inner.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartRequest<'a> {
    user_id: &'a UserId,
    product_id: &'a ProductId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RateProductRequest<'a> {
    user_id: &'a UserId,
    product_id: &'a ProductId,
    rating: StarRating,
}

/// Surface non-success statuses with the raw body as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Read the body as text first so parse failures can log what came back.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "failed to parse catalog service response"
        );
        ApiError::Parse(e.to_string())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> CatalogConfig {
        CatalogConfig::new(Url::parse("http://localhost:4000/api").unwrap())
    }

    #[test]
    fn test_endpoint_joins_onto_base() {
        let api = HttpCatalogApi::new(&test_config()).unwrap();
        let url = api.endpoint(LIST_PRODUCTS_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/all-products");
    }

    #[test]
    fn test_delete_endpoint_escapes_id() {
        let api = HttpCatalogApi::new(&test_config()).unwrap();
        let url = api
            .delete_endpoint(&ProductId::new("odd id/with?chars"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/api/delete-product/odd%20id%2Fwith%3Fchars"
        );
    }

    #[test]
    fn test_request_bodies_use_wire_names() {
        let user = UserId::new("u-1");
        let product = ProductId::new("p-1");
        let body = RateProductRequest {
            user_id: &user,
            product_id: &product,
            rating: StarRating::new(4).unwrap(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userId": "u-1", "productId": "p-1", "rating": 4})
        );
    }
}
