//! Error types for mapping operations.

use std::fmt;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Override requested for an input value the store does not hold.
    UnknownInput(String),
    /// Program field missing from the loaded table.
    FieldNotFound(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInput(input) => write!(f, "Unknown input value: {input}"),
            Self::FieldNotFound(field) => write!(f, "Field not found in table: {field}"),
        }
    }
}

impl std::error::Error for MapError {}
