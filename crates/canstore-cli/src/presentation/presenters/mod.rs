pub mod catalog;

pub use catalog::{build_product_card, build_screen_view_model};
