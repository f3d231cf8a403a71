use std::fmt;

/// Errors that occur when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Table name failed identifier validation.
    InvalidTableName(String),
    /// Column name was empty or contained whitespace or `-`.
    InvalidColumnName(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTableName(s) => {
                write!(
                    f,
                    "invalid table name '{s}': must match [-A-Za-z0-9_]+"
                )
            }
            Self::InvalidColumnName(s) => {
                write!(
                    f,
                    "invalid column name '{s}': must be non-empty without whitespace or '-'"
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
