use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Current filter inputs chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub search_term: String,
}

impl Selection {
    pub fn new(category: Category, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// True when neither control narrows the list
    pub fn is_unfiltered(&self) -> bool {
        self.category == Category::All && self.search_term.is_empty()
    }
}
