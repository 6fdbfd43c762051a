use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Category selector options, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Vegetables,
    Meat,
    Soup,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Vegetables,
        Category::Meat,
        Category::Soup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Vegetables => "Vegetables",
            Category::Meat => "Meat",
            Category::Soup => "Soup",
        }
    }

    /// Whether a product tagged `product_type` passes this category.
    ///
    /// Only the selection side is case-folded; product types are compared
    /// as stored, so `"Vegetables"` in the catalog never matches.
    pub fn matches(&self, product_type: &str) -> bool {
        match self {
            Category::All => true,
            other => product_type == other.label().to_lowercase(),
        }
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around
    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        match self {
            Category::All => 0,
            Category::Vegetables => 1,
            Category::Meat => 2,
            Category::Soup => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_anything() {
        assert!(Category::All.matches("vegetables"));
        assert!(Category::All.matches("Unknown"));
        assert!(Category::All.matches(""));
    }

    #[test]
    fn test_matches_lowercased_selection_only() {
        assert!(Category::Vegetables.matches("vegetables"));
        assert!(!Category::Vegetables.matches("Vegetables"));
        assert!(!Category::Meat.matches("soup"));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Category::All.next(), Category::Vegetables);
        assert_eq!(Category::Soup.next(), Category::All);
        assert_eq!(Category::All.previous(), Category::Soup);
        assert_eq!(Category::Meat.previous(), Category::Vegetables);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("meat".parse::<Category>().unwrap(), Category::Meat);
        assert_eq!("SOUP".parse::<Category>().unwrap(), Category::Soup);
        assert_eq!(" All ".parse::<Category>().unwrap(), Category::All);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "fish".parse::<Category>().unwrap_err();
        assert_eq!(err, Error::UnknownCategory("fish".to_string()));
    }
}
