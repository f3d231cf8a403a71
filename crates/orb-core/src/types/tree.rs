use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::table::Table;

/// The parsed form of a whole document.
///
/// Directives are document-global `#key=value` settings; a repeated key
/// keeps its last value. They are kept sorted by key so every rendering of
/// the same tree is identical. Tables keep their declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub directives: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a directive, replacing any earlier value for the same key.
    pub fn set_directive(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(previous) = self.directives.insert(name.clone(), value) {
            tracing::trace!(directive = %name, %previous, "directive overwritten");
        }
    }

    /// Returns the value of a directive.
    pub fn directive(&self, name: &str) -> Option<&str> {
        self.directives.get(name).map(String::as_str)
    }

    /// Looks up the first table with the given name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name.as_str() == name)
    }

    /// True when the document declared no directives and no tables.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.tables.is_empty()
    }
}
