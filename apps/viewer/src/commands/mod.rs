//! # Viewer Commands
//!
//! Each submodule turns front-end requests into `CatalogStore` calls and
//! returns serializable responses.

pub mod catalog;

pub use catalog::{execute, handle_line, summary, Action, CatalogResponse, Reply};
