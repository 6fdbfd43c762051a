//! TUI Presenter for the catalog view
//!
//! PURE FUNCTIONS that convert the catalog, the selection and the visible
//! indices into a `CatalogScreenViewModel`.
//!
//! ## Design Principles:
//! - NO state management (the Renderer owns state, the Presenter is stateless)
//! - ALL formatting and color decisions happen here
//! - Views only map data to widgets

use canstore_engine::{FilterSummary, describe_selection};
use canstore_types::{Category, Product, Selection};

use crate::presentation::view_models::{
    CatalogScreenViewModel, ControlsViewModel, FocusTarget, FooterViewModel, HeaderViewModel,
    ListContent, ProductCardViewModel, ProductListViewModel, StatusBarViewModel, StatusLevel,
};
use crate::state::{CatalogState, ViewSettings};

pub const SEARCH_PLACEHOLDER: &str = "e.g. beans";

const ATTRIBUTION_HEADING: &str = "All icons found at the Noun Project:";
const ATTRIBUTION_CREDITS: [&str; 4] = [
    "Bean can icon by Yazmin Alanis",
    "Vegetable icon by Ricardo Moreira",
    "Soup icon by Arthur Shlain",
    "Meat Chunk icon by Oliviu Stoian",
];

/// Build complete screen ViewModel from current view state
pub fn build_screen_view_model(
    settings: &ViewSettings,
    catalog: &CatalogState,
    visible: &[usize],
    selection: &Selection,
    focus: FocusTarget,
    scroll: usize,
) -> CatalogScreenViewModel {
    CatalogScreenViewModel {
        header: HeaderViewModel {
            title: settings.title.clone(),
        },
        controls: build_controls(selection, focus),
        product_list: ProductListViewModel {
            content: build_list_content(settings, catalog, visible),
            scroll,
        },
        status_bar: build_status_bar(catalog, visible, selection, focus),
        footer: FooterViewModel {
            heading: ATTRIBUTION_HEADING.to_string(),
            credits: ATTRIBUTION_CREDITS.iter().map(|c| c.to_string()).collect(),
        },
    }
}

/// Card for one product, shared by the TUI and the console listing
pub fn build_product_card(product: &Product, settings: &ViewSettings) -> ProductCardViewModel {
    ProductCardViewModel {
        name: product.name.clone(),
        kind: product.kind.clone(),
        price_label: product.display_price(&settings.currency),
        image_path: settings.images.for_product(product).display().to_string(),
        kind_color: kind_color(&product.kind),
    }
}

fn kind_color(kind: &str) -> StatusLevel {
    if Category::Vegetables.matches(kind) {
        StatusLevel::Success
    } else if Category::Meat.matches(kind) {
        StatusLevel::Error
    } else if Category::Soup.matches(kind) {
        StatusLevel::Warning
    } else {
        StatusLevel::Info
    }
}

fn build_controls(selection: &Selection, focus: FocusTarget) -> ControlsViewModel {
    ControlsViewModel {
        category_label: "Choose a category:".to_string(),
        category_options: Category::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect(),
        selected_category: selection.category.index(),
        search_label: "Enter search term:".to_string(),
        search_term: selection.search_term.clone(),
        search_placeholder: SEARCH_PLACEHOLDER.to_string(),
        focus,
    }
}

fn build_list_content(
    settings: &ViewSettings,
    catalog: &CatalogState,
    visible: &[usize],
) -> ListContent {
    match catalog {
        CatalogState::Loading => ListContent::Loading {
            message: "Loading catalog...".to_string(),
        },
        CatalogState::Failed(message) => ListContent::Failed {
            title: "Failed to load catalog".to_string(),
            message: message.clone(),
        },
        CatalogState::Ready(catalog) => {
            let products = catalog.products();
            let cards = visible
                .iter()
                .filter_map(|&idx| products.get(idx))
                .map(|p| build_product_card(p, settings))
                .collect();
            ListContent::Ready {
                cards,
                empty_message: "No products match the current filter.".to_string(),
            }
        }
    }
}

fn build_status_bar(
    catalog: &CatalogState,
    visible: &[usize],
    selection: &Selection,
    focus: FocusTarget,
) -> StatusBarViewModel {
    let (status_message, status_level) = match catalog {
        CatalogState::Loading => ("Loading catalog...".to_string(), StatusLevel::Info),
        CatalogState::Failed(_) => ("Catalog unavailable".to_string(), StatusLevel::Error),
        CatalogState::Ready(catalog) => {
            let summary = FilterSummary::new(selection, visible.len(), catalog.len());
            let level = if summary.is_empty() {
                StatusLevel::Warning
            } else {
                StatusLevel::Success
            };
            (
                format!("Showing {} of {} products", summary.visible, summary.total),
                level,
            )
        }
    };

    let filter_description = describe_selection(selection);

    let mut key_hints = vec![("[Tab]".to_string(), "focus".to_string())];
    match focus {
        FocusTarget::Category => {
            key_hints.push(("[←/→]".to_string(), "category".to_string()));
            key_hints.push(("[q]".to_string(), "uit".to_string()));
        }
        FocusTarget::Search => {
            key_hints.push(("[type]".to_string(), "search".to_string()));
            key_hints.push(("[Esc]".to_string(), "quit".to_string()));
        }
    }
    key_hints.push(("[PgUp/PgDn]".to_string(), "scroll".to_string()));

    StatusBarViewModel {
        status_message,
        status_level,
        filter_description,
        key_hints,
    }
}
