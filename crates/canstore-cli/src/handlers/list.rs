use std::io;

use anyhow::{Result, anyhow};
use canstore_engine::apply_selection;
use canstore_runtime::{CatalogSource, Config, load_catalog};
use canstore_types::Selection;
use is_terminal::IsTerminal;

use crate::presentation::renderers::ConsoleRenderer;
use crate::state::ViewSettings;
use crate::types::OutputFormat;

pub fn handle(config: &Config, selection: &Selection, format: OutputFormat) -> Result<()> {
    let source = CatalogSource::from_path(&config.catalog_path);
    let catalog = load_catalog(&source)
        .map_err(|e| anyhow!("Failed to load catalog from {}: {}", source, e))?;

    let (visible, summary) = apply_selection(catalog.products(), selection);

    let json_mode = format == OutputFormat::Json;
    let color = !json_mode && io::stdout().is_terminal();

    let mut out = io::stdout().lock();
    ConsoleRenderer::new(json_mode, color).render(
        &mut out,
        &visible,
        &summary,
        &ViewSettings::from_config(config),
    )
}
