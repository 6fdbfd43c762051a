use canstore_engine::{FilterEngine, apply_selection, filter_indices, filter_products};
use canstore_types::{Category, Product, Selection};
use std::fs;
use std::path::Path;

// Helper to load Product[] from fixture JSON
fn load_products_from_fixture(fixture_name: &str) -> Vec<Product> {
    let path = Path::new("tests/fixtures").join(fixture_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

fn scenario_catalog() -> Vec<Product> {
    vec![
        Product::new("Lima Beans", "vegetables", 1.5, "a.png"),
        Product::new("Chicken Soup", "soup", 2.25, "b.png"),
    ]
}

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

fn search_terms() -> Vec<&'static str> {
    vec!["", "beans", "SOUP", "o", "chili", "zzz", " "]
}

#[test]
fn test_default_selection_is_identity() {
    for catalog in [load_products_from_fixture("products.json"), scenario_catalog(), vec![]] {
        let visible = filter_products(&catalog, &Selection::default());
        let expected: Vec<&Product> = catalog.iter().collect();
        assert_eq!(visible, expected);
    }
}

#[test]
fn test_category_yields_only_matching_type() {
    let catalog = load_products_from_fixture("products.json");

    for category in [Category::Vegetables, Category::Meat, Category::Soup] {
        let visible = filter_products(&catalog, &Selection::new(category, ""));
        let wanted = category.label().to_lowercase();

        assert!(!visible.is_empty(), "fixture has {} products", wanted);
        assert!(visible.iter().all(|p| p.kind == wanted));
        assert_eq!(
            visible.len(),
            catalog.iter().filter(|p| p.kind == wanted).count()
        );
    }
}

#[test]
fn test_search_yields_only_matching_names() {
    let catalog = load_products_from_fixture("products.json");

    for term in search_terms() {
        let visible = filter_products(&catalog, &Selection::new(Category::All, term));
        let folded = term.to_lowercase();
        assert!(
            visible
                .iter()
                .all(|p| p.name.to_lowercase().contains(&folded)),
            "term {:?} let through a non-matching name",
            term
        );
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = load_products_from_fixture("products.json");

    for category in Category::ALL {
        for term in search_terms() {
            let selection = Selection::new(category, term);
            let once: Vec<Product> = filter_products(&catalog, &selection)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_products(&once, &selection);
            let once_refs: Vec<&Product> = once.iter().collect();
            assert_eq!(twice, once_refs);
        }
    }
}

#[test]
fn test_visible_list_preserves_order() {
    let catalog = load_products_from_fixture("products.json");

    for category in Category::ALL {
        for term in search_terms() {
            let indices = filter_indices(&catalog, &Selection::new(category, term));
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_scenario_vegetables_category() {
    let catalog = scenario_catalog();
    let visible = filter_products(&catalog, &Selection::new(Category::Vegetables, ""));
    assert_eq!(names(&visible), vec!["Lima Beans"]);
}

#[test]
fn test_scenario_search_matches_name_not_type() {
    let catalog = scenario_catalog();
    let visible = filter_products(&catalog, &Selection::new(Category::All, "soup"));
    assert_eq!(names(&visible), vec!["Chicken Soup"]);
}

#[test]
fn test_scenario_no_product_matches_both() {
    let catalog = scenario_catalog();
    let visible = filter_products(&catalog, &Selection::new(Category::Meat, "lima"));
    assert!(visible.is_empty());
}

#[test]
fn test_capitalized_product_type_never_matches_category() {
    let catalog = vec![Product::new("Pea Soup", "Soup", 1.0, "s.png")];
    let visible = filter_products(&catalog, &Selection::new(Category::Soup, ""));
    assert!(visible.is_empty());
}

#[test]
fn test_combined_filter_on_fixture() {
    let catalog = load_products_from_fixture("products.json");
    let (visible, summary) =
        apply_selection(&catalog, &Selection::new(Category::Vegetables, "beans"));

    assert_eq!(
        names(&visible),
        vec!["Baked Beans", "Hot Chili Beans", "Refried Beans"]
    );
    assert_eq!(summary.visible, 3);
    assert_eq!(summary.total, catalog.len());
}

#[test]
fn test_engine_matches_free_functions() {
    let catalog = load_products_from_fixture("products.json");
    let mut engine = FilterEngine::new();

    for category in Category::ALL {
        for term in search_terms() {
            let selection = Selection::new(category, term);
            engine.recompute(&catalog, &selection);
            assert_eq!(engine.visible_indices(), filter_indices(&catalog, &selection));
        }
    }
}
