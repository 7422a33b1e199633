//! Core types for Shopglass.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod actor;
pub mod id;
pub mod rating;

pub use actor::{Actor, Role};
pub use id::*;
pub use rating::{RatingError, StarRating};
