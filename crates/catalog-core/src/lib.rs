//! # catalog-core: Pure Business Logic for the Catalog Viewer
//!
//! This crate holds the catalog model and its transition rules as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Viewer Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (browser / CLI)                    │   │
//! │  │   Product list ──► Price/Qty buttons ──► Sort panel ──► Stats   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ actions                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               catalog-state (manager + adapters)                │   │
//! │  │         ScopedCatalog (subtree)   SharedCatalog (process)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│   │   │
//! │  │   │  Product  │  │   Money   │  │ Operation │  │   rules   │   │   │
//! │  │   │ Discount  │  │           │  │   stats   │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, DiscountRate, SortCriteria)
//! - [`money`] - Money type with integer arithmetic
//! - [`stats`] - Aggregate statistics derived from a product list
//! - [`sort`] - Ordering rules for each sort criteria
//! - [`catalog`] - The catalog value and its transitions
//! - [`error`] - Domain error types
//! - [`validation`] - Rules applied to ingested product data
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Catalog, Money, Operation, Product, ProductId, SortCriteria};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(ProductId(1), "B", Money::from_cents(1000), 2, 0),
//!     Product::new(ProductId(2), "A", Money::from_cents(500), 1, 5000),
//! ]);
//!
//! let catalog = catalog.apply(Operation::Sort(Some(SortCriteria::Name)));
//! assert_eq!(catalog.products()[0].id, ProductId(2));
//! assert_eq!(catalog.statistics().final_total_cents, 2250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod sort;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Operation};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use stats::Statistics;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest price a product can be adjusted down to (one whole currency unit).
pub const MIN_PRICE: Money = Money::from_cents(100);

/// Highest price a product can hold (10,000,000.00).
pub const MAX_PRICE: Money = Money::from_cents(1_000_000_000);

/// Lowest quantity a product can be adjusted down to.
pub const MIN_QUANTITY: i64 = 1;

/// Highest quantity a product can hold.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Upper bound for the number of records taken from a dataset.
pub const MAX_INITIAL_COUNT: usize = 1000;
