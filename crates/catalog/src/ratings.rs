//! Ephemeral hover-preview ratings.
//!
//! Preview values live in a side table keyed by product id, never on the
//! product record itself, so the persisted `stars` value stays untouched
//! until a commit round-trips through the service.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use shopglass_core::{ProductId, StarRating};

/// Side table of transient per-product preview ratings.
///
/// Entries appear on hover-enter and disappear on hover-leave or on a
/// successful commit; they are never persisted.
#[derive(Debug, Default)]
pub struct RatingPreviews {
    entries: RwLock<HashMap<ProductId, StarRating>>,
}

impl RatingPreviews {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the preview for a product.
    pub fn set(&self, id: ProductId, rating: StarRating) {
        self.entries.write().insert(id, rating);
    }

    /// Remove the preview for a product.
    pub fn clear(&self, id: &ProductId) {
        self.entries.write().remove(id);
    }

    /// Current preview for a product, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<StarRating> {
        self.entries.read().get(id).copied()
    }

    /// Drop previews for products that are no longer in the catalog.
    pub fn retain_known(&self, known: &HashSet<ProductId>) {
        self.entries.write().retain(|id, _| known.contains(id));
    }

    /// Number of active previews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no previews are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stars(value: u8) -> StarRating {
        StarRating::new(value).unwrap()
    }

    #[test]
    fn test_set_get_clear() {
        let previews = RatingPreviews::new();
        let id = ProductId::new("p1");

        assert_eq!(previews.get(&id), None);

        previews.set(id.clone(), stars(4));
        assert_eq!(previews.get(&id), Some(stars(4)));

        previews.clear(&id);
        assert_eq!(previews.get(&id), None);
        assert!(previews.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let previews = RatingPreviews::new();
        let id = ProductId::new("p1");

        previews.set(id.clone(), stars(2));
        previews.set(id.clone(), stars(5));
        assert_eq!(previews.get(&id), Some(stars(5)));
        assert_eq!(previews.len(), 1);
    }

    #[test]
    fn test_entries_are_per_product() {
        let previews = RatingPreviews::new();
        previews.set(ProductId::new("p1"), stars(1));
        previews.set(ProductId::new("p2"), stars(5));

        previews.clear(&ProductId::new("p1"));
        assert_eq!(previews.get(&ProductId::new("p2")), Some(stars(5)));
    }

    #[test]
    fn test_retain_known_prunes_vanished_products() {
        let previews = RatingPreviews::new();
        previews.set(ProductId::new("p1"), stars(3));
        previews.set(ProductId::new("gone"), stars(4));

        let known: HashSet<ProductId> = [ProductId::new("p1")].into_iter().collect();
        previews.retain_known(&known);

        assert_eq!(previews.get(&ProductId::new("p1")), Some(stars(3)));
        assert_eq!(previews.get(&ProductId::new("gone")), None);
    }
}
