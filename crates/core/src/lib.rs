//! Shopglass Core - Shared types library.
//!
//! This crate provides common types used across all Shopglass components:
//! - `catalog` - Product catalog controller (fetch, page, mutate, reconcile)
//! - `cli` - Command-line tools for driving a deployed catalog service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, actors, and star ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
