//! In-memory catalog snapshot with load and reconciliation bookkeeping.
//!
//! The store is the one shared resource of the controller: an ordered
//! product collection mirrored from the service, loading/error flags, and
//! the fetch sequencing that keeps overlapping loads from clobbering newer
//! state with older responses.
//!
//! Writers never hold the lock across an await; every method here is
//! synchronous and brief.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::{debug, warn};

use shopglass_core::ProductId;

use crate::types::{Product, RatingSummary};

// =============================================================================
// Outcomes
// =============================================================================

/// What happened to a load completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This completion is reflected in the store.
    Applied,
    /// A newer load already replaced the snapshot; this completion was
    /// discarded.
    Stale,
}

/// What happened to a single-product reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The targeted product was updated or removed.
    Applied,
    /// The product id was no longer present; nothing changed.
    Missing,
}

/// Identifies one load request. Tickets are ordered by issue time and
/// compared on completion to discard stale responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

// =============================================================================
// CatalogStore
// =============================================================================

/// Ordered product collection plus the flags the presentation layer reads.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    products: Vec<Product>,
    is_loading: bool,
    has_error: bool,
    /// Sequence of the most recently issued load ticket.
    issued_seq: u64,
    /// Sequence of the load whose snapshot the store currently holds.
    applied_seq: u64,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Read side =====

    /// Clone of the current collection, in server order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Product> {
        self.state.read().products.clone()
    }

    /// Number of products held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().products.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().products.is_empty()
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.state.read().products.iter().find(|p| &p.id == id).cloned()
    }

    /// Ids currently present, for pruning derived per-product state.
    #[must_use]
    pub fn ids(&self) -> HashSet<ProductId> {
        self.state
            .read()
            .products
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// Whether the most recent relevant load failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state.read().has_error
    }

    // ===== Load lifecycle =====

    /// Mark a load as started and hand out its ticket.
    pub fn begin_load(&self) -> LoadTicket {
        let mut state = self.state.write();
        state.issued_seq += 1;
        state.is_loading = true;
        debug!(seq = state.issued_seq, "load started");
        LoadTicket(state.issued_seq)
    }

    /// Apply a successful load.
    ///
    /// Replaces the snapshot atomically and clears the error flag — unless a
    /// newer load already applied, in which case this completion is
    /// discarded. The loading flag is cleared only by the newest issued
    /// load's completion, so it never sticks while a fetch is outstanding.
    pub fn apply_load(&self, ticket: LoadTicket, products: Vec<Product>) -> LoadOutcome {
        let mut state = self.state.write();
        if ticket.0 == state.issued_seq {
            state.is_loading = false;
        }
        if ticket.0 <= state.applied_seq {
            debug!(
                seq = ticket.0,
                applied = state.applied_seq,
                "discarding stale load result"
            );
            return LoadOutcome::Stale;
        }
        state.products = dedup_by_id(products);
        state.applied_seq = ticket.0;
        state.has_error = false;
        debug!(seq = ticket.0, count = state.products.len(), "catalog replaced");
        LoadOutcome::Applied
    }

    /// Record a failed load.
    ///
    /// The previous snapshot is preserved; the error flag is set unless a
    /// newer load already applied (a stale failure carries no information
    /// the presentation layer should see).
    pub fn fail_load(&self, ticket: LoadTicket) -> LoadOutcome {
        let mut state = self.state.write();
        if ticket.0 == state.issued_seq {
            state.is_loading = false;
        }
        if ticket.0 <= state.applied_seq {
            debug!(seq = ticket.0, "ignoring stale load failure");
            return LoadOutcome::Stale;
        }
        state.has_error = true;
        warn!(seq = ticket.0, "load failed; keeping previous catalog");
        LoadOutcome::Applied
    }

    // ===== Reconciliation =====

    /// Merge an authoritative rating aggregate into the targeted product.
    ///
    /// Only `stars` and `ratings_count` change; ordering and every other
    /// field stay untouched.
    pub fn merge_rating(&self, id: &ProductId, summary: &RatingSummary) -> Reconciliation {
        let mut state = self.state.write();
        match state.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                product.stars = summary.stars;
                product.ratings_count = summary.ratings_count;
                Reconciliation::Applied
            }
            None => {
                warn!(product = %id, "rating reconciliation targeted a product no longer in the catalog");
                Reconciliation::Missing
            }
        }
    }

    /// Replace the targeted product wholesale, preserving its position.
    pub fn replace_product(&self, id: &ProductId, new_value: Product) -> Reconciliation {
        let mut state = self.state.write();
        match state.products.iter_mut().find(|p| &p.id == id) {
            Some(slot) => {
                *slot = new_value;
                Reconciliation::Applied
            }
            None => {
                warn!(product = %id, "replace targeted a product no longer in the catalog");
                Reconciliation::Missing
            }
        }
    }

    /// Remove the targeted product after a confirmed deletion.
    pub fn remove_product(&self, id: &ProductId) -> Reconciliation {
        let mut state = self.state.write();
        let before = state.products.len();
        state.products.retain(|p| &p.id != id);
        if state.products.len() == before {
            warn!(product = %id, "removal targeted a product no longer in the catalog");
            Reconciliation::Missing
        } else {
            Reconciliation::Applied
        }
    }
}

/// Drop duplicate ids from a fetch response, keeping the first occurrence.
///
/// The store's invariant is one entry per id; the server is expected to
/// uphold it, so a duplicate is worth a warning.
fn dedup_by_id(mut products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    products.retain(|product| {
        let fresh = seen.insert(product.id.clone());
        if !fresh {
            warn!(product = %product.id, "duplicate product id in fetch response; keeping first occurrence");
        }
        fresh
    });
    products
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "test".to_owned(),
            price: Decimal::new(1000, 2),
            discount_percentage: 0.0,
            discounted_price: None,
            quantity,
            stars: 3.0,
            ratings_count: 10,
            img_url: None,
        }
    }

    #[test]
    fn test_load_replaces_snapshot_and_clears_flags() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        assert!(store.is_loading());

        let outcome = store.apply_load(ticket, vec![product("p1", 5), product("p2", 0)]);
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(store.len(), 2);
        assert!(!store.is_loading());
        assert!(!store.has_error());
    }

    #[test]
    fn test_failed_load_preserves_catalog_and_sets_error() {
        let store = CatalogStore::new();
        let first = store.begin_load();
        store.apply_load(first, vec![product("p1", 5)]);

        let second = store.begin_load();
        assert!(store.is_loading());
        let outcome = store.fail_load(second);
        assert_eq!(outcome, LoadOutcome::Applied);

        assert_eq!(store.len(), 1);
        assert!(store.has_error());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let store = CatalogStore::new();
        let first = store.begin_load();
        store.fail_load(first);
        assert!(store.has_error());

        let second = store.begin_load();
        store.apply_load(second, vec![product("p1", 5)]);
        assert!(!store.has_error());
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let store = CatalogStore::new();
        let older = store.begin_load();
        let newer = store.begin_load();

        assert_eq!(
            store.apply_load(newer, vec![product("new", 1)]),
            LoadOutcome::Applied
        );
        assert_eq!(
            store.apply_load(older, vec![product("old", 1)]),
            LoadOutcome::Stale
        );

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.first().unwrap().id, ProductId::new("new"));
    }

    #[test]
    fn test_stale_failure_sets_no_error() {
        let store = CatalogStore::new();
        let older = store.begin_load();
        let newer = store.begin_load();

        store.apply_load(newer, vec![product("new", 1)]);
        assert_eq!(store.fail_load(older), LoadOutcome::Stale);
        assert!(!store.has_error());
    }

    #[test]
    fn test_loading_cleared_only_by_newest_completion() {
        let store = CatalogStore::new();
        let older = store.begin_load();
        let newer = store.begin_load();

        // Older completion arrives first: the newer load is still in
        // flight, so the flag stays up.
        store.apply_load(older, vec![product("old", 1)]);
        assert!(store.is_loading());

        store.apply_load(newer, vec![product("new", 1)]);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_duplicate_ids_deduped_keeping_first() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(
            ticket,
            vec![product("p1", 5), product("p2", 3), product("p1", 99)],
        );

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_merge_rating_touches_only_rating_fields() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(ticket, vec![product("p1", 5), product("p2", 3)]);
        let before = store.snapshot();

        let outcome = store.merge_rating(
            &ProductId::new("p1"),
            &RatingSummary {
                stars: 3.2,
                ratings_count: 11,
            },
        );
        assert_eq!(outcome, Reconciliation::Applied);

        let after = store.snapshot();
        assert_eq!(after.len(), before.len());

        let (p1_before, p1_after) = (before.first().unwrap(), after.first().unwrap());
        assert!((p1_after.stars - 3.2).abs() < f64::EPSILON);
        assert_eq!(p1_after.ratings_count, 11);
        assert_eq!(p1_after.id, p1_before.id);
        assert_eq!(p1_after.name, p1_before.name);
        assert_eq!(p1_after.price, p1_before.price);
        assert_eq!(p1_after.quantity, p1_before.quantity);

        // The untargeted product is untouched entirely.
        assert_eq!(after.get(1), before.get(1));
    }

    #[test]
    fn test_merge_rating_missing_id_is_noop() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(ticket, vec![product("p1", 5)]);
        let before = store.snapshot();

        let outcome = store.merge_rating(
            &ProductId::new("ghost"),
            &RatingSummary {
                stars: 5.0,
                ratings_count: 1,
            },
        );
        assert_eq!(outcome, Reconciliation::Missing);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_replace_product_preserves_position() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(ticket, vec![product("p1", 5), product("p2", 3)]);

        let mut updated = product("p2", 42);
        updated.name = "Renamed".to_owned();
        let outcome = store.replace_product(&ProductId::new("p2"), updated.clone());
        assert_eq!(outcome, Reconciliation::Applied);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.get(1), Some(&updated));
        assert_eq!(snapshot.first().unwrap().id, ProductId::new("p1"));
    }

    #[test]
    fn test_remove_product() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(ticket, vec![product("p1", 5), product("p2", 3)]);

        assert_eq!(
            store.remove_product(&ProductId::new("p1")),
            Reconciliation::Applied
        );
        assert_eq!(store.len(), 1);
        assert!(store.get(&ProductId::new("p1")).is_none());

        assert_eq!(
            store.remove_product(&ProductId::new("p1")),
            Reconciliation::Missing
        );
    }

    #[test]
    fn test_get_and_ids() {
        let store = CatalogStore::new();
        let ticket = store.begin_load();
        store.apply_load(ticket, vec![product("p1", 5), product("p2", 3)]);

        assert_eq!(store.get(&ProductId::new("p2")).unwrap().quantity, 3);
        assert!(store.get(&ProductId::new("ghost")).is_none());

        let ids = store.ids();
        assert!(ids.contains(&ProductId::new("p1")));
        assert!(ids.contains(&ProductId::new("p2")));
        assert_eq!(ids.len(), 2);
    }
}
