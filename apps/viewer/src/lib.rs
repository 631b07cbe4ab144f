//! # Catalog Viewer Library
//!
//! Wires configuration, the product dataset and a catalog adapter to a
//! line-oriented JSON protocol.
//!
//! ## Module Organization
//! ```text
//! catalog_viewer_lib/
//! ├── lib.rs          ◄─── You are here (startup, session loop)
//! ├── cli.rs          ◄─── Argument parsing, config resolution
//! ├── error.rs        ◄─── ApiError (serializable)
//! └── commands/
//!     └── catalog.rs  ◄─── Action → CatalogStore call → Reply
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Parse flags, resolve config (flags > env > scope preset)
//! 3. Load the first N dataset records
//! 4. Mount the catalog: `ScopedCatalog` (provider) or `SharedCatalog` (store)
//! 5. Serve stdin lines until EOF
//! 6. Optionally print the summary, then shut the catalog down

pub mod cli;
pub mod commands;
pub mod error;

use std::io::{self, BufRead, Write};

use catalog_core::Product;
use catalog_state::{load_initial_products, CatalogConfig, CatalogStore, ScopedCatalog, SharedCatalog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Scope, USAGE};
use crate::commands::{handle_line, summary};
use crate::error::ApiError;

/// Runs the viewer against the process's stdin/stdout.
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = args.config()?;
    info!(
        scope = ?args.scope,
        initial_count = config.initial_count,
        "Starting catalog viewer"
    );

    let products = load_initial_products(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let (input, output) = (stdin.lock(), stdout.lock());

    match args.scope {
        Scope::Provider => {
            let store = ScopedCatalog::provide(products);
            serve(&store, &config, args.summary, input, output)?;
            store.shutdown();
        }
        Scope::Store => {
            let store = mount_store(products);
            serve(&store, &config, args.summary, input, output)?;
            store.shutdown();
        }
    }

    info!("Catalog viewer stopped");
    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - ERROR: I/O and dataset failures
/// - WARN: no-op adjustments, unrecognized sort criteria
/// - INFO: startup, initialize, shutdown
/// - DEBUG: every action and transition
///
/// Override with `RUST_LOG`, e.g. `RUST_LOG=catalog=trace`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// The process-wide store: created empty, then initialized.
fn mount_store(products: Vec<Product>) -> SharedCatalog {
    let store = SharedCatalog::new();
    store.initialize(products);
    store
}

fn serve<S, R, W>(
    store: &S,
    config: &CatalogConfig,
    print_summary: bool,
    input: R,
    output: W,
) -> Result<(), ApiError>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let handled = run_session(store, input, output)?;
    debug!(handled, "Input closed");

    if print_summary {
        let stats = store.snapshot()?.statistics;
        eprint!("{}", summary(config, &stats));
    }
    Ok(())
}

/// Answers every non-blank line of `input` with one JSON line on `output`.
///
/// Returns the number of lines handled. Action failures are replies, not
/// errors; only I/O problems end the session early.
pub fn run_session<S, R, W>(store: &S, input: R, mut output: W) -> io::Result<usize>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let mut updates = store.subscribe();
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(store, &line);
        serde_json::to_writer(&mut output, &reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;

        if updates.has_changed().unwrap_or(false) {
            if let Some(snapshot) = updates.borrow_and_update().as_ref() {
                debug!(revision = snapshot.revision, "Catalog updated");
            }
        }
    }

    Ok(handled)
}
