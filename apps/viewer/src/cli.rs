//! # Command-Line Arguments
//!
//! ```text
//! catalog-viewer [--scope provider|store] [--count N] [--dataset PATH] [--summary]
//! ```
//!
//! Flags override `CATALOG_*` environment variables, which override the
//! preset chosen by `--scope`.

use std::path::PathBuf;

use catalog_state::config::parse_initial_count;
use catalog_state::CatalogConfig;

use crate::error::ApiError;

pub const USAGE: &str = "\
Catalog Viewer

Reads JSON action lines on stdin and writes one JSON reply per line.

Usage: catalog-viewer [OPTIONS]

Options:
  -s, --scope <SCOPE>    provider (first 20 records) or store (first 100) [default: provider]
  -c, --count <N>        Number of dataset records to load (1-1000)
  -d, --dataset <PATH>   Product JSON file (default: built-in dataset)
      --summary          Print a statistics summary to stderr on exit
  -h, --help             Show this help message
";

/// Which adapter mounts the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Single-threaded, tree-local catalog.
    #[default]
    Provider,
    /// Process-wide catalog behind a mutex.
    Store,
}

impl Scope {
    fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw {
            "provider" => Ok(Scope::Provider),
            "store" => Ok(Scope::Store),
            other => Err(ApiError::bad_request(format!(
                "Unknown scope {:?} (expected provider or store)",
                other
            ))),
        }
    }

    pub fn preset(&self) -> CatalogConfig {
        match self {
            Scope::Provider => CatalogConfig::provider(),
            Scope::Store => CatalogConfig::store(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub scope: Scope,
    pub count: Option<usize>,
    pub dataset: Option<PathBuf>,
    pub summary: bool,
    pub help: bool,
}

impl Args {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scope" | "-s" => parsed.scope = Scope::parse(&value(&arg, args.next())?)?,
                "--count" | "-c" => {
                    let raw = value(&arg, args.next())?;
                    parsed.count = Some(parse_initial_count(&raw).map_err(|e| {
                        ApiError::bad_request(format!("Invalid --count {:?}: {}", raw, e))
                    })?);
                }
                "--dataset" | "-d" => parsed.dataset = Some(PathBuf::from(value(&arg, args.next())?)),
                "--summary" => parsed.summary = true,
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(ApiError::bad_request(format!("Unknown argument {:?}", other)))
                }
            }
        }

        Ok(parsed)
    }

    /// Resolves the configuration: preset, then environment, then flags.
    pub fn config_with<F>(&self, lookup: F) -> Result<CatalogConfig, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.scope.preset().with_overrides(lookup)?;

        if let Some(count) = self.count {
            config.initial_count = count;
        }
        if let Some(path) = &self.dataset {
            config.dataset_path = Some(path.clone());
        }

        Ok(config)
    }

    pub fn config(&self) -> Result<CatalogConfig, ApiError> {
        self.config_with(|key| std::env::var(key).ok())
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, ApiError> {
    next.ok_or_else(|| ApiError::bad_request(format!("{} requires a value", flag)))
}
