use canstore_types::{Category, Selection};
use serde::Serialize;

/// Describes one filter result: what was asked and how much survived
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub category: Category,
    pub search_term: String,
    pub visible: usize,
    pub total: usize,
}

impl FilterSummary {
    pub fn new(selection: &Selection, visible: usize, total: usize) -> Self {
        Self {
            category: selection.category,
            search_term: selection.search_term.clone(),
            visible,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    pub fn describe(&self) -> String {
        describe_filter(self.category, &self.search_term)
    }
}

/// Short human description of a filter, e.g. `Meat, "spam"` or `All`
pub fn describe_selection(selection: &Selection) -> String {
    describe_filter(selection.category, &selection.search_term)
}

fn describe_filter(category: Category, search_term: &str) -> String {
    if search_term.is_empty() {
        category.label().to_string()
    } else {
        format!("{}, \"{}\"", category.label(), search_term)
    }
}
