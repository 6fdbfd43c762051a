pub mod catalog;
pub mod category;
pub mod error;
pub mod product;
pub mod selection;

pub use catalog::Catalog;
pub use category::Category;
pub use error::{Error, Result};
pub use product::{Product, format_price};
pub use selection::Selection;
