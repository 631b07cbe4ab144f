//! # Scoped Catalog
//!
//! Tree-local adapter: one catalog per subtree of views, shared among the
//! views of that subtree by cloning the handle. Single-threaded
//! (`Rc<RefCell<_>>`), so it is not `Send`; a different subtree builds its
//! own instance.
//!
//! ```text
//!   ScopedCatalog::provide(first 20 records)
//!          │ clone()            │ clone()
//!          ▼                    ▼
//!     ProductList            SortPanel        (same manager)
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use catalog_core::{Catalog, Operation, Product};

use crate::error::StateResult;
use crate::manager::{CatalogManager, CatalogSnapshot, SnapshotReceiver};
use crate::store::CatalogStore;

#[derive(Debug, Clone, Default)]
pub struct ScopedCatalog {
    manager: Rc<RefCell<CatalogManager>>,
}

impl ScopedCatalog {
    /// Creates an uninitialized scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope initialized with `products`, the way a provider is
    /// mounted with its initial data.
    pub fn provide(products: Vec<Product>) -> Self {
        ScopedCatalog {
            manager: Rc::new(RefCell::new(CatalogManager::with_products(products))),
        }
    }

    /// Runs `f` with read access to the current catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> StateResult<R>
    where
        F: FnOnce(&Catalog) -> R,
    {
        self.manager.borrow().catalog().map(f)
    }

    /// Tears the scope down; other handles to it see `NotInitialized`.
    pub fn shutdown(&self) {
        self.manager.borrow_mut().shutdown();
    }
}

impl CatalogStore for ScopedCatalog {
    fn initialize(&self, products: Vec<Product>) -> Arc<CatalogSnapshot> {
        self.manager.borrow_mut().initialize(products)
    }

    fn dispatch(&self, op: Operation) -> StateResult<Arc<CatalogSnapshot>> {
        self.manager.borrow_mut().dispatch(op)
    }

    fn snapshot(&self) -> StateResult<Arc<CatalogSnapshot>> {
        self.manager.borrow().snapshot()
    }

    fn subscribe(&self) -> SnapshotReceiver {
        self.manager.borrow().subscribe()
    }
}
