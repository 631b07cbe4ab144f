//! # Catalog State Manager
//!
//! The single owner of the current [`Catalog`]. Both adapters
//! ([`ScopedCatalog`](crate::ScopedCatalog) and
//! [`SharedCatalog`](crate::SharedCatalog)) wrap one of these; neither holds
//! any transition logic of its own.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────────────┐   initialize    ┌───────────────┐                  │
//! │   │ Uninitialized │ ──────────────► │     Ready     │ ◄──┐             │
//! │   └───────────────┘                 └───────────────┘    │             │
//! │           ▲                            │   │  adjust_price│             │
//! │           │          shutdown          │   │  adjust_qty  │             │
//! │           └────────────────────────────┘   │  sort        │             │
//! │                                            │  initialize  │             │
//! │   Reads and mutations while Uninitialized  └──────────────┘             │
//! │   return StateError::NotInitialized.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition replaces the catalog, bumps the revision and publishes a
//! fresh snapshot before returning, so a subscriber never sees products and
//! statistics from different revisions.

use std::sync::Arc;

use catalog_core::{Catalog, Money, Operation, Product, ProductId, SortCriteria, Statistics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::error::{StateError, StateResult};

/// Receiver half handed to subscribers. `None` while uninitialized.
pub type SnapshotReceiver = watch::Receiver<Option<Arc<CatalogSnapshot>>>;

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of the catalog after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub statistics: Statistics,
    /// Starts at 1 on the first initialize; +1 per transition.
    #[ts(type = "number")]
    pub revision: u64,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    fn capture(catalog: &Catalog, revision: u64, updated_at: DateTime<Utc>) -> Self {
        CatalogSnapshot {
            products: catalog.products().to_vec(),
            statistics: *catalog.statistics(),
            revision,
            updated_at,
        }
    }
}

// =============================================================================
// Manager
// =============================================================================

/// Owns the catalog and applies transitions to it.
#[derive(Debug)]
pub struct CatalogManager {
    catalog: Option<Catalog>,
    revision: u64,
    publisher: watch::Sender<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogManager {
    /// Creates an uninitialized manager.
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(None);
        CatalogManager {
            catalog: None,
            revision: 0,
            publisher,
        }
    }

    /// Creates a manager already initialized with `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut manager = CatalogManager::new();
        manager.initialize(products);
        manager
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    /// Revision of the current catalog; 0 before the first initialize.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the catalog wholesale. Valid in any state.
    pub fn initialize(&mut self, products: Vec<Product>) -> Arc<CatalogSnapshot> {
        info!(count = products.len(), "Initializing catalog");
        self.commit(Catalog::default().apply(Operation::Initialize(products)))
    }

    pub fn adjust_price(&mut self, id: ProductId, delta: Money) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::AdjustPrice { id, delta })
    }

    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::AdjustQuantity { id, delta })
    }

    /// Sorts by `criteria`; `None` (an unrecognized name) keeps the order.
    pub fn sort(&mut self, criteria: Option<SortCriteria>) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::Sort(criteria))
    }

    /// Applies any operation.
    ///
    /// `Initialize` is accepted in every state; everything else requires a
    /// prior initialize.
    pub fn dispatch(&mut self, op: Operation) -> StateResult<Arc<CatalogSnapshot>> {
        if let Operation::Initialize(products) = op {
            return Ok(self.initialize(products));
        }

        let current = self.catalog()?;
        debug!(operation = op.name(), revision = self.revision, "Applying catalog operation");

        if let Some(id) = op.target() {
            if !current.contains(id) {
                warn!(operation = op.name(), %id, "Unknown product id, catalog unchanged");
            }
        }
        if matches!(op, Operation::Sort(None)) {
            warn!("Unrecognized sort criteria, order unchanged");
        }

        self.transition(|catalog| catalog.apply(op))
    }

    /// Builds the next catalog from a copy of the current one and commits it.
    ///
    /// The current catalog stays in place until `next` returns, so a panic
    /// inside `next` leaves the catalog, revision and published snapshot as
    /// they were.
    pub(crate) fn transition<F>(&mut self, next: F) -> StateResult<Arc<CatalogSnapshot>>
    where
        F: FnOnce(Catalog) -> Catalog,
    {
        let current = self.catalog()?.clone();
        Ok(self.commit(next(current)))
    }

    /// Current catalog, or `NotInitialized`.
    pub fn catalog(&self) -> StateResult<&Catalog> {
        self.catalog.as_ref().ok_or(StateError::NotInitialized)
    }

    /// Most recently published snapshot, or `NotInitialized`.
    pub fn snapshot(&self) -> StateResult<Arc<CatalogSnapshot>> {
        self.publisher
            .borrow()
            .clone()
            .ok_or(StateError::NotInitialized)
    }

    pub fn statistics(&self) -> StateResult<Statistics> {
        self.catalog().map(|c| *c.statistics())
    }

    /// Subscribes to snapshots published after each transition.
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.publisher.subscribe()
    }

    /// Tears the catalog down and returns to the uninitialized state.
    ///
    /// Subscribers receive `None`. The revision counter is kept so that a
    /// later initialize still produces a higher revision.
    pub fn shutdown(&mut self) {
        if self.catalog.take().is_some() {
            info!(revision = self.revision, "Catalog shut down");
        }
        self.publisher.send_replace(None);
    }

    fn commit(&mut self, catalog: Catalog) -> Arc<CatalogSnapshot> {
        self.revision += 1;
        let snapshot = Arc::new(CatalogSnapshot::capture(&catalog, self.revision, Utc::now()));
        self.catalog = Some(catalog);
        self.publisher.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(ProductId(1), "B", Money::from_units(10), 2, 0),
            Product::new(ProductId(2), "A", Money::from_units(5), 1, 5000),
        ]
    }

    #[test]
    fn test_reads_fail_before_initialize() {
        let manager = CatalogManager::new();
        assert!(!manager.is_ready());
        assert!(matches!(manager.snapshot(), Err(StateError::NotInitialized)));
        assert!(matches!(manager.catalog(), Err(StateError::NotInitialized)));
        assert!(matches!(manager.statistics(), Err(StateError::NotInitialized)));
    }

    #[test]
    fn test_mutations_fail_before_initialize() {
        let mut manager = CatalogManager::new();
        let result = manager.adjust_price(ProductId(1), Money::from_units(1));
        assert!(matches!(result, Err(StateError::NotInitialized)));
        assert!(matches!(manager.sort(Some(SortCriteria::Name)), Err(StateError::NotInitialized)));
        assert_eq!(manager.revision(), 0);
    }

    #[test]
    fn test_initialize_then_sort() {
        let mut manager = CatalogManager::with_products(sample());
        let snapshot = manager.sort(Some(SortCriteria::Name)).unwrap();

        let ids: Vec<u64> = snapshot.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(snapshot.statistics.final_total_cents, 2250);
        assert_eq!(snapshot.statistics.average_price_cents, 833);
        assert_eq!(snapshot.revision, 2);
    }

    #[test]
    fn test_price_floor_through_manager() {
        let mut manager = CatalogManager::with_products(sample());
        let snapshot = manager.adjust_price(ProductId(1), Money::from_units(-100)).unwrap();
        assert_eq!(snapshot.products[0].price_cents, 100);
    }

    #[test]
    fn test_noops_still_advance_revision() {
        let mut manager = CatalogManager::with_products(sample());
        let before = manager.snapshot().unwrap();

        let after = manager.adjust_quantity(ProductId(42), 3).unwrap();
        assert_eq!(after.products, before.products);
        assert_eq!(after.statistics, before.statistics);
        assert_eq!(after.revision, before.revision + 1);

        let after_sort = manager.sort(None).unwrap();
        assert_eq!(after_sort.products, before.products);
    }

    #[test]
    fn test_dispatch_initialize_replaces() {
        let mut manager = CatalogManager::with_products(sample());
        let snapshot = manager.dispatch(Operation::Initialize(Vec::new())).unwrap();
        assert!(snapshot.products.is_empty());
        assert_eq!(snapshot.statistics, Statistics::default());
    }

    #[test]
    fn test_snapshot_matches_catalog() {
        let mut manager = CatalogManager::with_products(sample());
        manager.adjust_quantity(ProductId(2), 4).unwrap();

        let snapshot = manager.snapshot().unwrap();
        let catalog = manager.catalog().unwrap();
        assert_eq!(snapshot.products, catalog.products());
        assert_eq!(&snapshot.statistics, catalog.statistics());
    }

    #[test]
    fn test_shutdown_returns_to_uninitialized() {
        let mut manager = CatalogManager::with_products(sample());
        let rx = manager.subscribe();
        manager.shutdown();

        assert!(!manager.is_ready());
        assert!(rx.borrow().is_none());
        assert!(matches!(manager.snapshot(), Err(StateError::NotInitialized)));

        let snapshot = manager.initialize(sample());
        assert_eq!(snapshot.revision, 2);
    }

    #[test]
    fn test_panicking_transition_keeps_state() {
        let mut manager = CatalogManager::with_products(sample());
        manager.adjust_quantity(ProductId(1), 1).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            manager.transition(|_| panic!("transition failed"))
        }));
        assert!(result.is_err());

        assert!(manager.is_ready());
        assert_eq!(manager.revision(), 2);
        let snapshot = manager.snapshot().unwrap();
        let catalog = manager.catalog().unwrap();
        assert_eq!(snapshot.revision, 2);
        assert_eq!(snapshot.products, catalog.products());
        assert_eq!(catalog.get(ProductId(1)).unwrap().quantity, 3);

        let next = manager.sort(Some(SortCriteria::Name)).unwrap();
        assert_eq!(next.revision, 3);
    }

    #[test]
    fn test_extreme_deltas_through_manager() {
        let mut manager = CatalogManager::with_products(sample());
        let snapshot = manager.adjust_quantity(ProductId(1), i64::MAX).unwrap();
        assert_eq!(snapshot.products[0].quantity, catalog_core::MAX_QUANTITY);

        let snapshot = manager
            .adjust_price(ProductId(2), Money::from_decimal(1e300))
            .unwrap();
        assert_eq!(snapshot.products[1].price(), catalog_core::MAX_PRICE);
        assert_eq!(snapshot.statistics, Statistics::compute(&snapshot.products));
    }

    #[tokio::test]
    async fn test_subscriber_sees_each_transition() {
        let mut manager = CatalogManager::new();
        let mut rx = manager.subscribe();
        assert!(rx.borrow().is_none());

        manager.initialize(sample());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().revision, 1);

        manager.adjust_quantity(ProductId(1), 1).unwrap();
        rx.changed().await.unwrap();
        let latest = rx.borrow_and_update().clone().unwrap();
        assert_eq!(latest.revision, 2);
        assert_eq!(latest.statistics.total_products, 4);
    }
}
