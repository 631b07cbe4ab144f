//! # Catalog Viewer Entry Point
//!
//! ```text
//! front end ──JSON lines──► stdin ──► catalog-viewer ──► stdout ──JSON lines──► front end
//!                                            │
//!                                            └──► stderr (logs, summary)
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match catalog_viewer_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("catalog-viewer: {}", err);
            ExitCode::FAILURE
        }
    }
}
