//! # Catalog Store Trait
//!
//! The seam presentation code programs against. Implemented by the scoped
//! and the shared adapter, so a view can be handed either one.
//!
//! ```rust
//! use catalog_state::{CatalogStore, ScopedCatalog, SharedCatalog};
//! use catalog_core::{Money, Product, ProductId};
//!
//! fn bump_first(store: &impl CatalogStore) {
//!     let first = store.snapshot().unwrap().products[0].id;
//!     store.adjust_quantity(first, 1).unwrap();
//! }
//!
//! let products = vec![Product::new(ProductId(1), "Pen", Money::from_units(2), 1, 0)];
//!
//! let scoped = ScopedCatalog::provide(products.clone());
//! let shared = SharedCatalog::new();
//! shared.initialize(products);
//!
//! bump_first(&scoped);
//! bump_first(&shared);
//! assert_eq!(scoped.snapshot().unwrap().products, shared.snapshot().unwrap().products);
//! ```

use std::sync::Arc;

use catalog_core::{Money, Operation, Product, ProductId, SortCriteria};

use crate::error::StateResult;
use crate::manager::{CatalogSnapshot, SnapshotReceiver};

/// Trigger surface plus read access for one catalog.
pub trait CatalogStore {
    /// Replaces the catalog. Never fails.
    fn initialize(&self, products: Vec<Product>) -> Arc<CatalogSnapshot>;

    /// Applies an operation as one atomic transition.
    fn dispatch(&self, op: Operation) -> StateResult<Arc<CatalogSnapshot>>;

    /// Latest snapshot, or `NotInitialized`.
    fn snapshot(&self) -> StateResult<Arc<CatalogSnapshot>>;

    /// Receives a snapshot after every transition.
    fn subscribe(&self) -> SnapshotReceiver;

    fn adjust_price(&self, id: ProductId, delta: Money) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::AdjustPrice { id, delta })
    }

    fn adjust_quantity(&self, id: ProductId, delta: i64) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::AdjustQuantity { id, delta })
    }

    fn sort(&self, criteria: Option<SortCriteria>) -> StateResult<Arc<CatalogSnapshot>> {
        self.dispatch(Operation::Sort(criteria))
    }

    /// Sorts by a criteria given by wire name (`"name"`, `"price"`,
    /// `"quantity"`). Other names leave the order unchanged.
    fn sort_by_name(&self, criteria: &str) -> StateResult<Arc<CatalogSnapshot>> {
        self.sort(SortCriteria::from_name(criteria))
    }
}
