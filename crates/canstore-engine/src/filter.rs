use canstore_types::{Product, Selection};

/// Case-insensitive substring match of `term` against the product name.
/// An empty term matches every name.
pub fn matches_search(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

fn is_visible(product: &Product, selection: &Selection) -> bool {
    selection.category.matches(&product.kind)
        && matches_search(&product.name, &selection.search_term)
}

/// Indices of visible products, in original order
pub fn filter_indices(products: &[Product], selection: &Selection) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| is_visible(p, selection))
        .map(|(idx, _)| idx)
        .collect()
}

/// Visible products, in original order
pub fn filter_products<'a>(products: &'a [Product], selection: &Selection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| is_visible(p, selection))
        .collect()
}

/// Holds the last computed visible set for a view.
///
/// Every `recompute` is a full pass over the product list; nothing is cached
/// between selections.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    visible: Vec<usize>,
    total: usize,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recompute(&mut self, products: &[Product], selection: &Selection) {
        self.visible = filter_indices(products, selection);
        self.total = products.len();
    }

    /// Indices into the product slice last passed to `recompute`
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> {
        self.visible.iter().filter_map(|&idx| products.get(idx))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canstore_types::Category;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("Lima Beans", "vegetables", 1.5, "a.png"),
            Product::new("Chicken Soup", "soup", 2.25, "b.png"),
        ]
    }

    #[test]
    fn test_matches_search_empty_term() {
        assert!(matches_search("Anything", ""));
        assert!(matches_search("", ""));
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        assert!(matches_search("Chicken Soup", "SOUP"));
        assert!(matches_search("Chicken Soup", "en so"));
        assert!(!matches_search("Chicken Soup", "beans"));
    }

    #[test]
    fn test_search_ignores_type() {
        let products = vec![Product::new("Beef Chunks", "soup", 1.0, "x.png")];
        let selection = Selection::new(Category::All, "soup");
        assert!(filter_indices(&products, &selection).is_empty());
    }

    #[test]
    fn test_engine_recompute_replaces_previous_result() {
        let products = sample();
        let mut engine = FilterEngine::new();

        engine.recompute(&products, &Selection::new(Category::Soup, ""));
        assert_eq!(engine.visible_indices(), &[1]);
        assert_eq!(engine.total(), 2);

        engine.recompute(&products, &Selection::default());
        assert_eq!(engine.visible_indices(), &[0, 1]);
        let names: Vec<_> = engine.visible(&products).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Lima Beans", "Chicken Soup"]);
    }

    #[test]
    fn test_engine_empty_before_first_recompute() {
        let engine = FilterEngine::new();
        assert_eq!(engine.visible_count(), 0);
        assert_eq!(engine.total(), 0);
    }
}
