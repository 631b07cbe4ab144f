//! # Shared Catalog
//!
//! Process-wide adapter. Instead of a module-level global constructed at
//! load time, the application creates one `SharedCatalog`, initializes it,
//! and passes clones of the handle to whatever needs it.
//!
//! ## Thread Safety
//! The manager is wrapped in `Arc<Mutex<T>>`:
//! - `Arc`: the handle is cloned into every consumer
//! - `Mutex`: one transition at a time; mutate, recompute and publish all
//!   happen under a single lock acquisition
//!
//! ## Lifecycle
//! ```text
//!   let store = SharedCatalog::new();      uninitialized
//!   store.initialize(first 100 records);  ready
//!   ... clones handed to consumers ...
//!   store.shutdown();                      uninitialized again
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use catalog_core::{Catalog, Operation, Product};

use crate::error::StateResult;
use crate::manager::{CatalogManager, CatalogSnapshot, SnapshotReceiver};
use crate::store::CatalogStore;

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    manager: Arc<Mutex<CatalogManager>>,
}

impl SharedCatalog {
    /// Creates an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = store.with_catalog(|c| c.statistics().final_total())?;
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> StateResult<R>
    where
        F: FnOnce(&Catalog) -> R,
    {
        self.lock().catalog().map(f)
    }

    /// Tears the store down. Every handle sees `NotInitialized` afterwards.
    pub fn shutdown(&self) {
        self.lock().shutdown();
    }

    /// Recovers a poisoned lock. Transitions build the next catalog from a
    /// copy and swap it in only on commit, so a panic mid-transition leaves
    /// the previous catalog and its snapshot in place.
    fn lock(&self) -> MutexGuard<'_, CatalogManager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for SharedCatalog {
    fn initialize(&self, products: Vec<Product>) -> Arc<CatalogSnapshot> {
        self.lock().initialize(products)
    }

    fn dispatch(&self, op: Operation) -> StateResult<Arc<CatalogSnapshot>> {
        self.lock().dispatch(op)
    }

    fn snapshot(&self) -> StateResult<Arc<CatalogSnapshot>> {
        self.lock().snapshot()
    }

    fn subscribe(&self) -> SnapshotReceiver {
        self.lock().subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use catalog_core::{Money, ProductId, SortCriteria};
    use std::thread;

    fn sample() -> Vec<Product> {
        (1..=10)
            .map(|id| {
                Product::new(
                    ProductId(id),
                    format!("Item {}", id),
                    Money::from_units(id as i64),
                    1,
                    0,
                )
            })
            .collect()
    }

    #[test]
    fn test_requires_initialize() {
        let store = SharedCatalog::new();
        assert!(matches!(store.snapshot(), Err(StateError::NotInitialized)));

        store.initialize(sample());
        assert_eq!(store.snapshot().unwrap().products.len(), 10);
    }

    #[test]
    fn test_concurrent_adjustments_all_apply() {
        let store = SharedCatalog::new();
        store.initialize(sample());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for id in 1..=10 {
                        store.adjust_quantity(ProductId(id), 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.statistics.total_products, 10 + 8 * 10);
        assert_eq!(snapshot.revision, 1 + 8 * 10);
        assert!(snapshot.products.iter().all(|p| p.quantity == 9));
    }

    #[test]
    fn test_snapshots_are_always_consistent() {
        let store = SharedCatalog::new();
        store.initialize(sample());
        let rx = store.subscribe();

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    store.adjust_price(ProductId(3), Money::from_cents(25)).unwrap();
                    store.sort(Some(SortCriteria::Price)).unwrap();
                }
            })
        };

        for _ in 0..50 {
            if let Some(snapshot) = rx.borrow().clone() {
                let recomputed = catalog_core::Statistics::compute(&snapshot.products);
                assert_eq!(snapshot.statistics, recomputed);
            }
        }
        writer.join().unwrap();
    }

    #[test]
    fn test_shutdown_then_reinitialize() {
        let store = SharedCatalog::new();
        let consumer = store.clone();
        store.initialize(sample());
        store.shutdown();

        assert!(matches!(consumer.with_catalog(|c| c.len()), Err(StateError::NotInitialized)));

        consumer.initialize(Vec::new());
        assert_eq!(store.with_catalog(|c| c.len()).unwrap(), 0);
    }

    #[test]
    fn test_extreme_delta_on_worker_thread() {
        let store = SharedCatalog::new();
        store.initialize(sample());

        let worker = {
            let store = store.clone();
            thread::spawn(move || store.adjust_quantity(ProductId(1), i64::MAX).map(|s| s.revision))
        };
        assert_eq!(worker.join().unwrap().unwrap(), 2);

        let snapshot = store.snapshot().unwrap();
        let quantity = store.with_catalog(|c| c.get(ProductId(1)).unwrap().quantity).unwrap();
        assert_eq!(quantity, catalog_core::MAX_QUANTITY);
        assert_eq!(snapshot.products[0].quantity, quantity);
    }

    #[test]
    fn test_poisoned_lock_keeps_catalog_and_snapshot_in_step() {
        let store = SharedCatalog::new();
        store.initialize(sample());

        let crashed = {
            let store = store.clone();
            thread::spawn(move || {
                let _ = store.lock().transition(|_| panic!("transition failed"));
            })
        };
        assert!(crashed.join().is_err());
        assert!(store.manager.is_poisoned());

        let snapshot = store.snapshot().unwrap();
        let products = store.with_catalog(|c| c.products().to_vec()).unwrap();
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.products, products);

        let sorted = store.sort(Some(SortCriteria::Name)).unwrap();
        assert_eq!(sorted.revision, 2);
    }
}
