use std::fmt;

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::table_name::TableName;

/// A named table and its columns, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: TableName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
}

impl Table {
    /// Creates a table with no columns.
    pub fn new(name: TableName) -> Self {
        Self {
            name,
            columns: Vec::new(),
        }
    }

    /// Creates a table with the given columns.
    pub fn with_columns(name: TableName, columns: Vec<Column>) -> Self {
        Self { name, columns }
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name.as_str() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
