//! Mutation coordination and the controller facade.
//!
//! Ties the store, pager, and preview table to the remote service,
//! enforcing the per-action refresh strategy: cart adds and deletes
//! re-fetch the whole catalog (inventory is server-owned), committed
//! ratings merge the authoritative aggregate in place, and edits replace
//! the record wholesale. Every mutating call takes the acting user
//! explicitly; no ambient session state is consulted.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use shopglass_core::{Actor, ProductId, Role, StarRating};

use crate::api::{ApiError, CatalogApi};
use crate::pager::{self, CatalogPage};
use crate::ratings::RatingPreviews;
use crate::store::{CatalogStore, LoadOutcome};
use crate::types::Product;

// =============================================================================
// Action kinds & affordances
// =============================================================================

/// The kinds of catalog mutations, used for affordance gating and the
/// in-flight guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    AddToCart,
    Rate,
    Delete,
    Edit,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddToCart => write!(f, "add-to-cart"),
            Self::Rate => write!(f, "rate"),
            Self::Delete => write!(f, "delete"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

/// Mutating affordances available to `actor` for `product`.
///
/// Anyone signed in may rate. Customers may add to cart while stock
/// remains; admins manage the record itself, regardless of stock. No
/// actor, no affordances.
#[must_use]
pub fn available_actions(actor: Option<&Actor>, product: &Product) -> Vec<MutationKind> {
    match actor {
        None => Vec::new(),
        Some(actor) if actor.is_admin() => {
            vec![MutationKind::Rate, MutationKind::Edit, MutationKind::Delete]
        }
        Some(_) if product.is_sold_out() => vec![MutationKind::Rate],
        Some(_) => vec![MutationKind::Rate, MutationKind::AddToCart],
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why a mutation was not (or only partially) applied.
#[derive(Debug, Error)]
pub enum MutationError {
    /// No actor supplied; mutations require a signed-in user.
    #[error("no signed-in user; mutations are unavailable")]
    NoActor,

    /// The actor's role does not permit this action.
    #[error("{action} requires the admin role (current role: {role})")]
    Forbidden {
        action: MutationKind,
        role: Role,
    },

    /// The product is not in the local catalog.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    /// The product is sold out; add-to-cart is unavailable.
    #[error("product {0} is sold out")]
    SoldOut(ProductId),

    /// The same action on the same product is already in flight.
    #[error("a {kind} request for product {product} is already pending")]
    AlreadyPending {
        product: ProductId,
        kind: MutationKind,
    },

    /// The service rejected or failed the request; nothing was applied.
    #[error("catalog service error: {0}")]
    Api(#[from] ApiError),

    /// The mutation was confirmed, but the follow-up catalog refresh
    /// failed. Local state may be stale until the next successful load.
    #[error("action applied, but refreshing the catalog failed: {0}")]
    RefreshFailed(#[source] ApiError),
}

// =============================================================================
// In-flight guard
// =============================================================================

type MutationKey = (ProductId, MutationKind);

/// Slots for mutations currently in flight, keyed by (product, kind).
///
/// Different products, or different kinds on the same product, proceed
/// independently; a duplicate claim is rejected.
#[derive(Debug, Default)]
struct InFlightSlots {
    slots: Arc<Mutex<HashSet<MutationKey>>>,
}

impl InFlightSlots {
    fn claim(&self, product: &ProductId, kind: MutationKind) -> Result<SlotTicket, MutationError> {
        let key = (product.clone(), kind);
        let mut slots = self.slots.lock();
        if !slots.insert(key.clone()) {
            return Err(MutationError::AlreadyPending {
                product: product.clone(),
                kind,
            });
        }
        Ok(SlotTicket {
            slots: Arc::clone(&self.slots),
            key,
        })
    }
}

/// Releases its slot when dropped, so every completion path frees the
/// guard.
struct SlotTicket {
    slots: Arc<Mutex<HashSet<MutationKey>>>,
    key: MutationKey,
}

impl Drop for SlotTicket {
    fn drop(&mut self) {
        self.slots.lock().remove(&self.key);
    }
}

// =============================================================================
// CatalogController
// =============================================================================

/// The catalog controller: one shared handle per catalog view.
///
/// Cheap to clone; all state lives behind an `Arc`. Generic over the
/// service transport so tests can substitute a scripted implementation.
pub struct CatalogController<A> {
    inner: Arc<ControllerInner<A>>,
}

impl<A> Clone for CatalogController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ControllerInner<A> {
    api: A,
    store: CatalogStore,
    previews: RatingPreviews,
    in_flight: InFlightSlots,
    /// 1-based; clamped against the catalog on every read.
    current_page: Mutex<usize>,
}

impl<A: CatalogApi> CatalogController<A> {
    /// Create a controller over a service transport.
    ///
    /// The catalog starts empty; call [`load`](Self::load) to populate it.
    pub fn new(api: A) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                api,
                store: CatalogStore::new(),
                previews: RatingPreviews::new(),
                in_flight: InFlightSlots::default(),
                current_page: Mutex::new(1),
            }),
        }
    }

    // ===== Loading =====

    /// Fetch the full collection and replace the catalog.
    ///
    /// Overlapping calls are sequenced: only the newest completion is
    /// reflected, stale results are discarded. On failure the previous
    /// catalog is preserved, the error flag is set, and the loading flag is
    /// still cleared.
    ///
    /// # Errors
    ///
    /// Returns the fetch error. The store's error flag mirrors it unless a
    /// newer load has already superseded this one.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ApiError> {
        let ticket = self.inner.store.begin_load();
        match self.inner.api.list_products().await {
            Ok(products) => {
                if self.inner.store.apply_load(ticket, products) == LoadOutcome::Applied {
                    self.inner.previews.retain_known(&self.inner.store.ids());
                }
                Ok(())
            }
            Err(e) => {
                self.inner.store.fail_load(ticket);
                Err(e)
            }
        }
    }

    // ===== Read views =====

    /// The currently selected page, clamped to the catalog.
    #[must_use]
    pub fn page(&self) -> CatalogPage {
        let snapshot = self.inner.store.snapshot();
        let total_pages = pager::total_pages(snapshot.len());
        let current_page = pager::clamp_page(*self.inner.current_page.lock(), total_pages);
        CatalogPage {
            products: pager::page_slice(&snapshot, current_page).to_vec(),
            current_page,
            total_pages,
        }
    }

    /// Select a page. Out-of-range values clamp; returns the page actually
    /// selected.
    pub fn set_page(&self, page: usize) -> usize {
        let total_pages = pager::total_pages(self.inner.store.len());
        let selected = pager::clamp_page(page, total_pages);
        *self.inner.current_page.lock() = selected;
        debug!(requested = page, selected, "page changed");
        selected
    }

    /// The currently selected page number, clamped to the catalog.
    #[must_use]
    pub fn current_page(&self) -> usize {
        pager::clamp_page(
            *self.inner.current_page.lock(),
            pager::total_pages(self.inner.store.len()),
        )
    }

    /// `ceil(catalog length / 8)`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.inner.store.len())
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.store.is_loading()
    }

    /// Whether the most recent relevant load failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.inner.store.has_error()
    }

    /// Clone of the whole catalog, in server order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.inner.store.snapshot()
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.inner.store.get(id)
    }

    /// Mutating affordances for a product, given the current actor.
    ///
    /// Empty when the product is not in the catalog.
    #[must_use]
    pub fn available_actions(&self, actor: Option<&Actor>, id: &ProductId) -> Vec<MutationKind> {
        self.inner
            .store
            .get(id)
            .map_or_else(Vec::new, |product| available_actions(actor, &product))
    }

    // ===== Preview ratings =====

    /// Record a hover preview. Display-only; the persisted rating is
    /// untouched.
    pub fn preview_rating(&self, id: ProductId, rating: StarRating) {
        self.inner.previews.set(id, rating);
    }

    /// Drop the hover preview (pointer left the widget).
    pub fn clear_preview(&self, id: &ProductId) {
        self.inner.previews.clear(id);
    }

    /// Rating to display for a product: the active preview if any, else the
    /// persisted average. `None` when the product is not in the catalog.
    #[must_use]
    pub fn effective_display_rating(&self, id: &ProductId) -> Option<f64> {
        let product = self.inner.store.get(id)?;
        Some(self.inner.previews.get(id).map_or(product.stars, f64::from))
    }

    // ===== Mutations =====

    /// Add a product to the actor's cart.
    ///
    /// Requires an actor; unknown and sold-out products are rejected
    /// locally, before any service call. On success the whole catalog is
    /// re-fetched — remaining stock is server-owned and never guessed
    /// locally.
    ///
    /// # Errors
    ///
    /// [`MutationError`] for local rejections, service failures, or a
    /// confirmed add whose follow-up refresh failed.
    #[instrument(skip(self, actor))]
    pub async fn add_to_cart(
        &self,
        actor: Option<&Actor>,
        id: &ProductId,
    ) -> Result<(), MutationError> {
        let actor = actor.ok_or(MutationError::NoActor)?;
        let product = self
            .inner
            .store
            .get(id)
            .ok_or_else(|| MutationError::UnknownProduct(id.clone()))?;
        if product.is_sold_out() {
            return Err(MutationError::SoldOut(id.clone()));
        }
        let _ticket = self.inner.in_flight.claim(id, MutationKind::AddToCart)?;

        self.inner.api.add_to_cart(&actor.id, id).await?;
        info!(product = %id, user = %actor.id, "product added to cart");

        self.load().await.map_err(MutationError::RefreshFailed)
    }

    /// Submit a star rating.
    ///
    /// The service returns the authoritative aggregate, which is merged
    /// into the existing record — only `stars` and `ratings_count` change.
    /// An active preview for the product is dropped on success. The store
    /// warns if the product vanished mid-flight; the commit still counts.
    ///
    /// # Errors
    ///
    /// [`MutationError`] when no actor is supplied, the same rating is
    /// already pending, or the service fails. On failure nothing is
    /// applied.
    #[instrument(skip(self, actor))]
    pub async fn commit_rating(
        &self,
        actor: Option<&Actor>,
        id: &ProductId,
        rating: StarRating,
    ) -> Result<(), MutationError> {
        let actor = actor.ok_or(MutationError::NoActor)?;
        let _ticket = self.inner.in_flight.claim(id, MutationKind::Rate)?;

        let summary = self.inner.api.rate_product(&actor.id, id, rating).await?;
        debug!(
            product = %id,
            stars = summary.stars,
            count = summary.ratings_count,
            "rating confirmed"
        );

        self.inner.store.merge_rating(id, &summary);
        self.inner.previews.clear(id);
        Ok(())
    }

    /// Delete a product from the catalog. Admin only.
    ///
    /// Non-admin callers are rejected locally, without a service call. On
    /// success the catalog is re-fetched for the authoritative post-delete
    /// state; if that refresh fails, the confirmed deletion is still
    /// applied locally and the refresh error is surfaced as
    /// [`MutationError::RefreshFailed`].
    ///
    /// # Errors
    ///
    /// [`MutationError`] for local rejections, service failures, or a
    /// failed follow-up refresh.
    #[instrument(skip(self, actor))]
    pub async fn delete_product(
        &self,
        actor: Option<&Actor>,
        id: &ProductId,
    ) -> Result<(), MutationError> {
        let actor = actor.ok_or(MutationError::NoActor)?;
        if !actor.is_admin() {
            return Err(MutationError::Forbidden {
                action: MutationKind::Delete,
                role: actor.role,
            });
        }
        let _ticket = self.inner.in_flight.claim(id, MutationKind::Delete)?;

        self.inner.api.delete_product(id).await?;
        info!(product = %id, "product deleted");

        match self.load().await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.inner.store.remove_product(id);
                self.inner.previews.clear(id);
                Err(MutationError::RefreshFailed(e))
            }
        }
    }

    /// Apply the record returned by a completed edit workflow. Admin only.
    ///
    /// Full replacement, not a merge: an edit may change any field. The
    /// store warns if the product vanished mid-edit.
    ///
    /// # Errors
    ///
    /// [`MutationError`] when no actor is supplied or the actor is not an
    /// admin.
    #[instrument(skip(self, actor, updated), fields(product = %updated.id))]
    pub fn apply_edit(
        &self,
        actor: Option<&Actor>,
        updated: Product,
    ) -> Result<(), MutationError> {
        let actor = actor.ok_or(MutationError::NoActor)?;
        if !actor.is_admin() {
            return Err(MutationError::Forbidden {
                action: MutationKind::Edit,
                role: actor.role,
            });
        }
        if updated
            .discounted_price
            .is_some_and(|discounted| discounted > updated.price)
        {
            warn!(product = %updated.id, "edited record has a sale price above the list price");
        }

        let id = updated.id.clone();
        self.inner.store.replace_product(&id, updated);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use shopglass_core::UserId;

    use crate::types::RatingSummary;

    use super::*;

    // ===== Scripted transport =====

    #[derive(Default)]
    struct FakeApi {
        products: Mutex<Vec<Product>>,
        rating_reply: Mutex<Option<RatingSummary>>,
        fail_list: AtomicBool,
        fail_mutations: AtomicBool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeApi {
        fn with_products(products: Vec<Product>) -> Arc<Self> {
            let api = Self::default();
            *api.products.lock() = products;
            Arc::new(api)
        }

        fn set_products(&self, products: Vec<Product>) {
            *self.products.lock() = products;
        }

        fn set_rating_reply(&self, summary: RatingSummary) {
            *self.rating_reply.lock() = Some(summary);
        }

        fn set_fail_list(&self, fail: bool) {
            self.fail_list.store(fail, Ordering::SeqCst);
        }

        fn set_fail_mutations(&self, fail: bool) {
            self.fail_mutations.store(fail, Ordering::SeqCst);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }

        fn scripted_error() -> ApiError {
            ApiError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            self.calls.lock().push("list_products");
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            Ok(self.products.lock().clone())
        }

        async fn add_to_cart(&self, _user: &UserId, _product: &ProductId) -> Result<(), ApiError> {
            self.calls.lock().push("add_to_cart");
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            Ok(())
        }

        async fn rate_product(
            &self,
            _user: &UserId,
            _product: &ProductId,
            rating: StarRating,
        ) -> Result<RatingSummary, ApiError> {
            self.calls.lock().push("rate_product");
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            Ok(self.rating_reply.lock().unwrap_or(RatingSummary {
                stars: f64::from(rating.get()),
                ratings_count: 1,
            }))
        }

        async fn delete_product(&self, _product: &ProductId) -> Result<(), ApiError> {
            self.calls.lock().push("delete_product");
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::scripted_error());
            }
            Ok(())
        }
    }

    // ===== Fixtures =====

    fn product(id: &str, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "test".to_owned(),
            price: Decimal::new(1850, 2),
            discount_percentage: 0.0,
            discounted_price: None,
            quantity,
            stars: 3.0,
            ratings_count: 10,
            img_url: None,
        }
    }

    fn customer() -> Actor {
        Actor::new(UserId::new("u-customer"), Role::Customer)
    }

    fn admin() -> Actor {
        Actor::new(UserId::new("u-admin"), Role::Admin)
    }

    fn stars(value: u8) -> StarRating {
        StarRating::new(value).unwrap()
    }

    async fn loaded_controller(
        products: Vec<Product>,
    ) -> (Arc<FakeApi>, CatalogController<Arc<FakeApi>>) {
        let api = FakeApi::with_products(products);
        let controller = CatalogController::new(Arc::clone(&api));
        controller.load().await.unwrap();
        (api, controller)
    }

    // ===== Loading =====

    #[tokio::test]
    async fn test_load_populates_catalog() {
        let (_api, controller) = loaded_controller(vec![product("p1", 5), product("p2", 0)]).await;

        assert_eq!(controller.products().len(), 2);
        assert!(!controller.is_loading());
        assert!(!controller.has_error());
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_and_keeps_catalog() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();

        api.set_fail_list(true);
        let result = controller.load().await;

        assert!(result.is_err());
        assert!(controller.has_error());
        assert!(!controller.is_loading());
        assert_eq!(controller.products(), before);
    }

    // ===== Paging =====

    #[tokio::test]
    async fn test_set_page_clamps() {
        let products = (0..17).map(|i| product(&format!("p{i}"), 1)).collect();
        let (_api, controller) = loaded_controller(products).await;

        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.set_page(4), 3);
        assert_eq!(controller.page().products.len(), 1);
        assert_eq!(controller.set_page(0), 1);
        assert_eq!(controller.page().products.len(), 8);
    }

    #[tokio::test]
    async fn test_page_on_empty_catalog() {
        let controller = CatalogController::new(FakeApi::with_products(Vec::new()));

        let page = controller.page();
        assert!(page.products.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
    }

    // ===== Preview ratings =====

    #[tokio::test]
    async fn test_effective_display_rating_prefers_preview() {
        let (_api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let id = ProductId::new("p1");

        assert_eq!(controller.effective_display_rating(&id), Some(3.0));

        controller.preview_rating(id.clone(), stars(5));
        assert_eq!(controller.effective_display_rating(&id), Some(5.0));

        controller.clear_preview(&id);
        assert_eq!(controller.effective_display_rating(&id), Some(3.0));

        assert_eq!(
            controller.effective_display_rating(&ProductId::new("ghost")),
            None
        );
    }

    #[tokio::test]
    async fn test_preview_never_touches_persisted_stars() {
        let (_api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let id = ProductId::new("p1");

        controller.preview_rating(id.clone(), stars(5));
        let stored = controller.product(&id).unwrap();
        assert!((stored.stars - 3.0).abs() < f64::EPSILON);
    }

    // ===== Add to cart =====

    #[tokio::test]
    async fn test_add_to_cart_requires_actor() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let calls_before = api.calls().len();

        let result = controller.add_to_cart(None, &ProductId::new("p1")).await;

        assert!(matches!(result, Err(MutationError::NoActor)));
        assert_eq!(api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_sold_out_locally() {
        let (api, controller) = loaded_controller(vec![product("p1", 0)]).await;
        let calls_before = api.calls().len();

        let result = controller
            .add_to_cart(Some(&customer()), &ProductId::new("p1"))
            .await;

        assert!(matches!(result, Err(MutationError::SoldOut(_))));
        assert_eq!(api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_unknown_product_locally() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let calls_before = api.calls().len();

        let result = controller
            .add_to_cart(Some(&customer()), &ProductId::new("ghost"))
            .await;

        assert!(matches!(result, Err(MutationError::UnknownProduct(_))));
        assert_eq!(api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_add_to_cart_refetches_on_success() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;

        // The service decrements stock; the refetch makes that visible.
        api.set_products(vec![product("p1", 4)]);
        controller
            .add_to_cart(Some(&customer()), &ProductId::new("p1"))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec!["list_products", "add_to_cart", "list_products"]
        );
        assert_eq!(
            controller.product(&ProductId::new("p1")).unwrap().quantity,
            4
        );
    }

    #[tokio::test]
    async fn test_add_to_cart_failure_leaves_catalog_untouched() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();

        api.set_fail_mutations(true);
        let result = controller
            .add_to_cart(Some(&customer()), &ProductId::new("p1"))
            .await;

        assert!(matches!(result, Err(MutationError::Api(_))));
        assert_eq!(controller.products(), before);
        // No refetch after a failed mutation.
        assert_eq!(api.calls(), vec!["list_products", "add_to_cart"]);
    }

    #[tokio::test]
    async fn test_add_to_cart_surfaces_refresh_failure() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;

        api.set_fail_list(true);
        let result = controller
            .add_to_cart(Some(&customer()), &ProductId::new("p1"))
            .await;

        assert!(matches!(result, Err(MutationError::RefreshFailed(_))));
        assert!(controller.has_error());
        // The catalog keeps its pre-add snapshot until the next load.
        assert_eq!(
            controller.product(&ProductId::new("p1")).unwrap().quantity,
            5
        );
    }

    // ===== Rating =====

    #[tokio::test]
    async fn test_commit_rating_merges_only_rating_fields() {
        let (api, controller) = loaded_controller(vec![product("p1", 5), product("p2", 3)]).await;
        api.set_rating_reply(RatingSummary {
            stars: 3.2,
            ratings_count: 11,
        });
        let before = controller.products();

        controller.preview_rating(ProductId::new("p1"), stars(5));
        controller
            .commit_rating(Some(&customer()), &ProductId::new("p1"), stars(5))
            .await
            .unwrap();

        let after = controller.products();
        assert_eq!(after.len(), before.len());

        let p1 = controller.product(&ProductId::new("p1")).unwrap();
        assert!((p1.stars - 3.2).abs() < f64::EPSILON);
        assert_eq!(p1.ratings_count, 11);
        assert_eq!(p1.name, before.first().unwrap().name);
        assert_eq!(p1.price, before.first().unwrap().price);
        assert_eq!(p1.quantity, before.first().unwrap().quantity);

        // The untargeted product is untouched, and no refetch happened.
        assert_eq!(after.get(1), before.get(1));
        assert_eq!(api.calls(), vec!["list_products", "rate_product"]);

        // Preview dropped on successful commit: display shows the new
        // persisted value.
        assert_eq!(
            controller.effective_display_rating(&ProductId::new("p1")),
            Some(3.2)
        );
    }

    #[tokio::test]
    async fn test_commit_rating_failure_changes_nothing() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();
        let id = ProductId::new("p1");

        controller.preview_rating(id.clone(), stars(4));
        api.set_fail_mutations(true);
        let result = controller.commit_rating(Some(&customer()), &id, stars(4)).await;

        assert!(matches!(result, Err(MutationError::Api(_))));
        assert_eq!(controller.products(), before);
        // A failed commit keeps the preview; nothing was persisted.
        assert_eq!(controller.effective_display_rating(&id), Some(4.0));
    }

    #[tokio::test]
    async fn test_commit_rating_requires_actor() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let calls_before = api.calls().len();

        let result = controller
            .commit_rating(None, &ProductId::new("p1"), stars(3))
            .await;

        assert!(matches!(result, Err(MutationError::NoActor)));
        assert_eq!(api.calls().len(), calls_before);
    }

    // ===== Delete =====

    #[tokio::test]
    async fn test_delete_rejected_for_customers_without_network() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();
        let calls_before = api.calls().len();

        let result = controller
            .delete_product(Some(&customer()), &ProductId::new("p1"))
            .await;

        assert!(matches!(
            result,
            Err(MutationError::Forbidden {
                action: MutationKind::Delete,
                ..
            })
        ));
        assert_eq!(api.calls().len(), calls_before);
        assert_eq!(controller.products(), before);
    }

    #[tokio::test]
    async fn test_delete_refetches_on_success() {
        let (api, controller) = loaded_controller(vec![product("p1", 5), product("p2", 3)]).await;

        api.set_products(vec![product("p2", 3)]);
        controller
            .delete_product(Some(&admin()), &ProductId::new("p1"))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec!["list_products", "delete_product", "list_products"]
        );
        assert!(controller.product(&ProductId::new("p1")).is_none());
        assert_eq!(controller.products().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_catalog_untouched() {
        let (api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();

        api.set_fail_mutations(true);
        let result = controller
            .delete_product(Some(&admin()), &ProductId::new("p1"))
            .await;

        assert!(matches!(result, Err(MutationError::Api(_))));
        assert_eq!(controller.products(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_locally_when_refresh_fails() {
        let (api, controller) = loaded_controller(vec![product("p1", 5), product("p2", 3)]).await;

        api.set_fail_list(true);
        let result = controller
            .delete_product(Some(&admin()), &ProductId::new("p1"))
            .await;

        // The deletion is confirmed even though the refresh failed, so the
        // entry must not linger locally.
        assert!(matches!(result, Err(MutationError::RefreshFailed(_))));
        assert!(controller.product(&ProductId::new("p1")).is_none());
        assert_eq!(controller.products().len(), 1);
    }

    // ===== Edit =====

    #[tokio::test]
    async fn test_apply_edit_replaces_record_wholesale() {
        let (_api, controller) = loaded_controller(vec![product("p1", 5), product("p2", 3)]).await;

        let mut updated = product("p1", 20);
        updated.name = "Renamed".to_owned();
        updated.price = Decimal::new(999, 2);
        controller
            .apply_edit(Some(&admin()), updated.clone())
            .unwrap();

        let products = controller.products();
        assert_eq!(products.first(), Some(&updated));
        assert_eq!(products.get(1).unwrap().id, ProductId::new("p2"));
    }

    #[tokio::test]
    async fn test_apply_edit_requires_admin() {
        let (_api, controller) = loaded_controller(vec![product("p1", 5)]).await;
        let before = controller.products();

        let result = controller.apply_edit(Some(&customer()), product("p1", 99));
        assert!(matches!(
            result,
            Err(MutationError::Forbidden {
                action: MutationKind::Edit,
                ..
            })
        ));
        assert_eq!(controller.products(), before);

        let result = controller.apply_edit(None, product("p1", 99));
        assert!(matches!(result, Err(MutationError::NoActor)));
    }

    // ===== Affordances =====

    #[test]
    fn test_available_actions_gating() {
        let in_stock = product("p1", 5);
        let sold_out = product("p2", 0);

        assert!(available_actions(None, &in_stock).is_empty());

        assert_eq!(
            available_actions(Some(&customer()), &in_stock),
            vec![MutationKind::Rate, MutationKind::AddToCart]
        );
        assert_eq!(
            available_actions(Some(&customer()), &sold_out),
            vec![MutationKind::Rate]
        );

        // Admins manage the record regardless of stock, and never see the
        // cart affordance.
        let admin = admin();
        for product in [&in_stock, &sold_out] {
            assert_eq!(
                available_actions(Some(&admin), product),
                vec![MutationKind::Rate, MutationKind::Edit, MutationKind::Delete]
            );
        }
    }

    // ===== In-flight guard =====

    #[test]
    fn test_in_flight_guard_blocks_same_product_and_kind() {
        let slots = InFlightSlots::default();
        let id = ProductId::new("p1");

        let ticket = slots.claim(&id, MutationKind::Rate).unwrap();
        assert!(matches!(
            slots.claim(&id, MutationKind::Rate),
            Err(MutationError::AlreadyPending { .. })
        ));

        // Different kind or different product proceeds independently.
        let _cart = slots.claim(&id, MutationKind::AddToCart).unwrap();
        let _other = slots.claim(&ProductId::new("p2"), MutationKind::Rate).unwrap();

        // Completion releases the slot.
        drop(ticket);
        assert!(slots.claim(&id, MutationKind::Rate).is_ok());
    }
}
