use std::fmt;

use serde::{Deserialize, Serialize};

use super::column_name::ColumnName;
use super::constraint::Constraint;

/// A typed column: name, logical type, optional `using` override type,
/// optional alias, and constraints in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: ColumnName,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl Column {
    /// Creates a column with no override type, alias, or constraints.
    pub fn new(name: ColumnName, column_type: impl Into<String>) -> Self {
        Self {
            name,
            column_type: column_type.into(),
            requested_type: None,
            alias: None,
            constraints: Vec::new(),
        }
    }

    /// Sets the `using` override type.
    pub fn with_requested_type(mut self, requested_type: impl Into<String>) -> Self {
        self.requested_type = Some(requested_type.into());
        self
    }

    /// Sets the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Appends a constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// The type downstream consumers should emit: the override if present.
    pub fn effective_type(&self) -> &str {
        self.requested_type.as_deref().unwrap_or(&self.column_type)
    }

    /// Looks up the first constraint with the given name.
    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Returns true if a constraint with the given name is present.
    pub fn has_constraint(&self, name: &str) -> bool {
        self.constraint(name).is_some()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)?;
        if let Some(requested) = &self.requested_type {
            write!(f, " using {requested}")?;
        }
        Ok(())
    }
}
