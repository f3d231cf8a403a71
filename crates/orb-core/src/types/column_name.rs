use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A validated column name: non-empty, no ASCII whitespace, no `-`.
///
/// The `-` exclusion keeps a column's first line distinguishable from the
/// `-`-prefixed alias and constraint lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a new `ColumnName`.
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if !is_column_ident(&s) {
            return Err(ModelError::InvalidColumnName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_column_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| !c.is_ascii_whitespace() && c != '-')
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ColumnName> for String {
    fn from(n: ColumnName) -> String {
        n.0
    }
}

impl TryFrom<String> for ColumnName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
