//! TUI View Components
//!
//! Ratatui Widget implementations for the catalog view. Each component is a
//! thin wrapper around a ViewModel that implements the Widget trait.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO logic, calculations, or formatting (except UI-specific layout)
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod controls;
pub mod footer;
pub mod header;
pub mod product_list;
pub mod status_bar;

pub use controls::ControlsView;
pub use footer::FooterView;
pub use header::HeaderView;
pub use product_list::ProductListView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
