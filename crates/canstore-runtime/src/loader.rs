//! Catalog acquisition
//!
//! The catalog is read once per session. `spawn_catalog_load` runs the read on
//! a worker thread and reports the outcome as a single `LoadEvent`, so the UI
//! loop keeps handling input while the file is read and parsed.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use canstore_types::{Catalog, Category};

use crate::{Error, Result};

/// Where the static catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    /// `-` on the command line
    Stdin,
}

impl CatalogSource {
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            CatalogSource::Stdin
        } else {
            CatalogSource::File(path.to_path_buf())
        }
    }

    fn read_to_string(&self) -> Result<String> {
        match self {
            CatalogSource::File(path) => Ok(std::fs::read_to_string(path)?),
            CatalogSource::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Outcome of the one-shot background load
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Catalog),
    Failed(String),
}

/// Read, parse and validate the catalog
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let started = Instant::now();
    tracing::info!(source = %source, "loading catalog");

    let content = source.read_to_string()?;
    let catalog = parse_catalog(&content)?;

    tracing::info!(
        source = %source,
        products = catalog.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a JSON array of products and check data invariants.
///
/// Prices must be finite and non-negative. Duplicate names and unknown
/// category tags are reported as warnings only.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(content)?;

    for product in catalog.products() {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(Error::InvalidCatalog(format!(
                "product '{}' has invalid price {}",
                product.name, product.price
            )));
        }

        let known = Category::ALL[1..]
            .iter()
            .any(|c| c.matches(&product.kind));
        if !known {
            tracing::warn!(
                product = %product.name,
                kind = %product.kind,
                "product type is not one of the selectable categories"
            );
        }
    }

    for name in catalog.duplicate_names() {
        tracing::warn!(product = %name, "duplicate product name in catalog");
    }

    Ok(catalog)
}

/// Load the catalog on a worker thread and send exactly one `LoadEvent`.
///
/// Send errors are ignored: a closed receiver means the view already quit.
pub fn spawn_catalog_load(source: CatalogSource, tx: Sender<LoadEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let event = match load_catalog(&source) {
            Ok(catalog) => LoadEvent::Loaded(catalog),
            Err(err) => {
                tracing::error!(source = %source, error = %err, "catalog load failed");
                LoadEvent::Failed(format!("{}: {}", source, err))
            }
        };
        let _ = tx.send(event);
    })
}
