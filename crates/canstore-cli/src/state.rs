use canstore_runtime::{Config, ImageResolver, LoadEvent};
use canstore_types::Catalog;

/// Lifecycle of the one catalog load
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog),
            CatalogState::Loading | CatalogState::Failed(_) => None,
        }
    }
}

impl From<LoadEvent> for CatalogState {
    fn from(event: LoadEvent) -> Self {
        match event {
            LoadEvent::Loaded(catalog) => CatalogState::Ready(catalog),
            LoadEvent::Failed(message) => CatalogState::Failed(message),
        }
    }
}

/// Display settings fixed for the whole session
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub title: String,
    pub currency: String,
    pub images: ImageResolver,
}

impl ViewSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            currency: config.currency.clone(),
            images: ImageResolver::new(config.images_dir.clone()),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
