pub mod config;
pub mod error;
pub mod images;
pub mod loader;

pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use images::ImageResolver;
pub use loader::{CatalogSource, LoadEvent, load_catalog, parse_catalog, spawn_catalog_load};
