use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::product::Product;

/// Full product list for one session, in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Product>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a product by its name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Names that appear more than once, in first-repeat order
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for product in &self.0 {
            let name = product.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_json_array() {
        let json = r#"[
            {"name":"Lima Beans","type":"vegetables","price":1.5,"image":"a.png"},
            {"name":"Chicken Soup","type":"soup","price":2.25,"image":"b.png"}
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "Lima Beans");
        assert_eq!(catalog.get("Chicken Soup").unwrap().kind, "soup");
        assert!(catalog.get("Tomato Soup").is_none());
    }

    #[test]
    fn test_duplicate_names() {
        let catalog = Catalog::new(vec![
            Product::new("Peas", "vegetables", 1.0, "p.png"),
            Product::new("Spam", "meat", 2.0, "s.png"),
            Product::new("Peas", "vegetables", 1.2, "p2.png"),
            Product::new("Peas", "vegetables", 1.3, "p3.png"),
        ]);

        assert_eq!(catalog.duplicate_names(), vec!["Peas"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.duplicate_names().is_empty());
    }
}
