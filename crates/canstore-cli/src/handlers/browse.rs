//! Browse Handler
//!
//! Starts the one-shot catalog load on a worker thread and runs the
//! interactive catalog view on the main thread until the user quits.

use std::sync::mpsc;

use anyhow::{Result, bail};
use canstore_runtime::{CatalogSource, Config, spawn_catalog_load};
use canstore_types::Selection;

use crate::presentation::renderers::TuiRenderer;
use crate::state::ViewSettings;

pub fn handle(config: &Config, selection: Selection) -> Result<()> {
    let source = CatalogSource::from_path(&config.catalog_path);
    if source == CatalogSource::Stdin {
        bail!("browse reads keyboard input from the terminal; pass the catalog as a file");
    }

    let (tx, rx) = mpsc::channel();
    // Detached: the read cannot be cancelled and must not delay quitting
    let _loader = spawn_catalog_load(source, tx);

    let renderer = TuiRenderer::new(ViewSettings::from_config(config), selection);
    renderer.run(rx)
}
