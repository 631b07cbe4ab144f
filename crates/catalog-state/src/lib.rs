//! # catalog-state: Catalog State Management
//!
//! One state manager, two ways to mount it.
//!
//! ## Module Organization
//! ```text
//! catalog_state/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── manager.rs  ◄─── CatalogManager: lifecycle, transitions, snapshots
//! ├── store.rs    ◄─── CatalogStore trait (the trigger surface)
//! ├── scoped.rs   ◄─── ScopedCatalog: per-subtree, Rc<RefCell<_>>
//! ├── shared.rs   ◄─── SharedCatalog: process-wide, Arc<Mutex<_>>
//! ├── config.rs   ◄─── CatalogConfig: presets + env overrides
//! ├── dataset.rs  ◄─── Static dataset loading (bounded prefix)
//! └── error.rs    ◄─── StateError
//! ```
//!
//! ## State Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  View event ──► CatalogStore::adjust_price(id, Δ)                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │        adapter borrow / lock ──► CatalogManager::dispatch               │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                       Catalog::apply (catalog-core, pure)               │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                  commit: revision += 1, publish snapshot                │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                   subscribers re-read (products, statistics)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod manager;
pub mod scoped;
pub mod shared;
pub mod store;

pub use config::CatalogConfig;
pub use dataset::{
    builtin_products, convert_records, load_dataset, load_initial_products, parse_dataset,
    ProductRecord,
};
pub use error::{StateError, StateResult};
pub use manager::{CatalogManager, CatalogSnapshot, SnapshotReceiver};
pub use scoped::ScopedCatalog;
pub use shared::SharedCatalog;
pub use store::CatalogStore;
