//! Integration tests for Naked Pineapple.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database
//! task db:start
//!
//! # Run integration tests
//! task test:integration
//! ```
//!
//! # Test Categories
//!
//! - `storefront` - Storefront API tests
//! - `admin` - Admin API tests
//! - `database` - Database integration tests
//!
//! # Future Implementation
//!
//! ```rust,ignore
//! use reqwest::Client;
//! use sqlx::PgPool;
//!
//! pub struct TestContext {
//!     pub client: Client,
//!     pub storefront_url: String,
//!     pub admin_url: String,
//!     pub storefront_pool: PgPool,
//!     pub admin_pool: PgPool,
//! }
//!
//! impl TestContext {
//!     pub async fn new() -> Self {
//!         // Load test configuration
//!         // Connect to test databases
//!         // Start test servers or use existing
//!     }
//! }
//!
//! #[tokio::test]
//! async fn test_storefront_health() {
//!     let ctx = TestContext::new().await;
//!     let resp = ctx.client
//!         .get(&format!("{}/health", ctx.storefront_url))
//!         .send()
//!         .await
//!         .unwrap();
//!     assert_eq!(resp.status(), 200);
//! }
//! ```

// TODO: Implement integration test framework
