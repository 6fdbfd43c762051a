use std::io::Write;

use anyhow::Result;
use canstore_engine::FilterSummary;
use canstore_types::Product;
use owo_colors::OwoColorize;

use crate::presentation::presenters::build_product_card;
use crate::presentation::view_models::{ProductCardViewModel, StatusLevel};
use crate::state::ViewSettings;

/// Prints a filtered product listing for the non-interactive `list` command
pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, color: bool) -> Self {
        Self { json_mode, color }
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        products: &[&Product],
        summary: &FilterSummary,
        settings: &ViewSettings,
    ) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(products)?)?;
            return Ok(());
        }

        let cards: Vec<ProductCardViewModel> = products
            .iter()
            .map(|p| build_product_card(p, settings))
            .collect();

        let name_width = cards
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);
        let price_width = cards
            .iter()
            .map(|c| c.price_label.chars().count())
            .max()
            .unwrap_or(0);
        let kind_width = cards
            .iter()
            .map(|c| c.kind.chars().count())
            .max()
            .unwrap_or(0);

        for card in &cards {
            let name = format!("{:<width$}", card.name, width = name_width);
            let price = format!("{:>width$}", card.price_label, width = price_width);
            let kind = format!("{:<width$}", card.kind, width = kind_width);

            if self.color {
                writeln!(
                    out,
                    "{}  {}  {}  {}",
                    name.bold(),
                    price,
                    self.paint_kind(&kind, card.kind_color),
                    card.image_path.dimmed()
                )?;
            } else {
                writeln!(out, "{}  {}  {}  {}", name, price, kind, card.image_path)?;
            }
        }

        if cards.is_empty() {
            writeln!(out, "No products match the current filter.")?;
        }

        let footer = format!(
            "Showing {} of {} products (Filter: {})",
            summary.visible,
            summary.total,
            summary.describe()
        );
        if self.color {
            writeln!(out, "\n{}", footer.dimmed())?;
        } else {
            writeln!(out, "\n{}", footer)?;
        }

        Ok(())
    }

    fn paint_kind(&self, kind: &str, level: StatusLevel) -> String {
        match level {
            StatusLevel::Success => kind.green().to_string(),
            StatusLevel::Info => kind.cyan().to_string(),
            StatusLevel::Warning => kind.yellow().to_string(),
            StatusLevel::Error => kind.red().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canstore_types::{Category, Selection};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Lima Beans", "vegetables", 1.5, "a.png"),
            Product::new("Chicken Soup", "soup", 2.25, "b.png"),
        ]
    }

    #[test]
    fn test_plain_listing() {
        let all = products();
        let visible: Vec<&Product> = all.iter().collect();
        let summary = FilterSummary::new(&Selection::default(), 2, 2);

        let mut out = Vec::new();
        ConsoleRenderer::new(false, false)
            .render(&mut out, &visible, &summary, &ViewSettings::default())
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Lima Beans    $1.50  vegetables  images/a.png");
        assert_eq!(lines[1], "Chicken Soup  $2.25  soup        images/b.png");
        assert!(text.ends_with("Showing 2 of 2 products (Filter: All)\n"));
    }

    #[test]
    fn test_plain_listing_empty() {
        let summary = FilterSummary::new(&Selection::new(Category::Meat, "lima"), 0, 2);

        let mut out = Vec::new();
        ConsoleRenderer::new(false, false)
            .render(&mut out, &[], &summary, &ViewSettings::default())
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("No products match the current filter."));
        assert!(text.contains("Showing 0 of 2 products (Filter: Meat, \"lima\")"));
    }

    #[test]
    fn test_json_listing_uses_catalog_shape() {
        let all = products();
        let visible: Vec<&Product> = all.iter().skip(1).collect();
        let summary = FilterSummary::new(&Selection::new(Category::Soup, ""), 1, 2);

        let mut out = Vec::new();
        ConsoleRenderer::new(true, false)
            .render(&mut out, &visible, &summary, &ViewSettings::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "Chicken Soup");
        assert_eq!(array[0]["type"], "soup");
        assert_eq!(array[0]["price"], 2.25);
    }
}
