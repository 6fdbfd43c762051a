//! TUI-specific ViewModels for the catalog view
//!
//! These ViewModels define the complete data contract for the TUI Renderer.
//! They contain ONLY primitive types and computed values - NO domain logic.
//! Labels, prices and colors are already decided when they arrive here.

use serde::Serialize;

use super::common::StatusLevel;

/// Which control receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTarget {
    #[default]
    Category,
    Search,
}

impl FocusTarget {
    pub fn toggle(self) -> Self {
        match self {
            FocusTarget::Category => FocusTarget::Search,
            FocusTarget::Search => FocusTarget::Category,
        }
    }
}

/// Complete screen state for TUI rendering
#[derive(Debug, Clone, Serialize)]
pub struct CatalogScreenViewModel {
    pub header: HeaderViewModel,
    pub controls: ControlsViewModel,
    pub product_list: ProductListViewModel,
    pub status_bar: StatusBarViewModel,
    pub footer: FooterViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
}

/// Aside panel: category selector and search box
#[derive(Debug, Clone, Serialize)]
pub struct ControlsViewModel {
    pub category_label: String,
    /// Option labels in display order
    pub category_options: Vec<String>,
    pub selected_category: usize,
    pub search_label: String,
    pub search_term: String,
    pub search_placeholder: String,
    pub focus: FocusTarget,
}

/// Main region content
#[derive(Debug, Clone, Serialize)]
pub struct ProductListViewModel {
    pub content: ListContent,
    /// Number of cards skipped from the top
    pub scroll: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ListContent {
    Loading { message: String },
    Failed { title: String, message: String },
    Ready {
        cards: Vec<ProductCardViewModel>,
        empty_message: String,
    },
}

/// One visible product
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardViewModel {
    pub name: String,
    pub kind: String,
    pub price_label: String,
    pub image_path: String,
    pub kind_color: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status_message: String,
    pub status_level: StatusLevel,
    pub filter_description: String,
    pub key_hints: Vec<(String, String)>,
}

/// Static attribution lines
#[derive(Debug, Clone, Serialize)]
pub struct FooterViewModel {
    pub heading: String,
    pub credits: Vec<String>,
}
