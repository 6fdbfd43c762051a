pub mod catalog;
pub mod common;

pub use catalog::{
    CatalogScreenViewModel, ControlsViewModel, FocusTarget, FooterViewModel, HeaderViewModel,
    ListContent, ProductCardViewModel, ProductListViewModel, StatusBarViewModel,
};
pub use common::StatusLevel;
