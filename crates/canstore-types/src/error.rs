use std::fmt;

/// Result type for canstore-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Category label outside the fixed option set
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory(label) => write!(
                f,
                "Unknown category '{}' (expected one of: All, Vegetables, Meat, Soup)",
                label
            ),
        }
    }
}

impl std::error::Error for Error {}
