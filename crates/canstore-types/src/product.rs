use serde::{Deserialize, Serialize};

/// One catalog item as stored in the static catalog file.
///
/// The on-disk shape is `{ "name", "type", "price", "image" }`; `type` is a
/// Rust keyword, so the field is exposed as `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display title, also the stable list key within one catalog
    pub name: String,
    /// Lower-case category tag (`vegetables`, `meat`, `soup`)
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    /// Image filename, relative to the images directory
    pub image: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            price,
            image: image.into(),
        }
    }

    /// Price with currency prefix and exactly two fraction digits
    pub fn display_price(&self, currency: &str) -> String {
        format_price(self.price, currency)
    }
}

/// Format a price as `{currency}{amount}` with two fraction digits (e.g. `$1.50`).
///
/// Cents round half away from zero, and negative zero prints as `0.00`.
pub fn format_price(price: f64, currency: &str) -> String {
    let mut cents = (price * 100.0).round() / 100.0;
    if cents == 0.0 {
        cents = 0.0;
    }
    format!("{}{:.2}", currency, cents)
}
