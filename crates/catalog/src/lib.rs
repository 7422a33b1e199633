//! Shopglass Catalog - Product catalog controller.
//!
//! Fetches, pages, rates, and reconciles a product catalog mirrored from a
//! remote catalog service.
//!
//! # Modules
//!
//! - [`api`] - The remote service seam: [`api::CatalogApi`] trait and the
//!   [`api::HttpCatalogApi`] reqwest transport
//! - [`config`] - [`config::CatalogConfig`] loaded from environment variables
//! - [`controller`] - [`controller::CatalogController`] facade coordinating
//!   loads, mutations, and reconciliation
//! - [`pager`] - Pure page derivation over the catalog
//! - [`ratings`] - Ephemeral hover-preview rating side table
//! - [`store`] - In-memory catalog snapshot with load sequencing
//! - [`types`] - Product records and rating aggregates in wire format

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controller;
pub mod pager;
pub mod ratings;
pub mod store;
pub mod types;
