use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, optionally valued property attached to a column.
///
/// Names may contain internal whitespace (`primary key`, `not null`).
/// The value is free text, e.g. the referenced table of a `foreign key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Constraint {
    /// Creates a bare constraint with no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a constraint carrying a value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_bare() {
        assert_eq!(Constraint::new("not null").to_string(), "not null");
    }

    #[test]
    fn display_with_value() {
        let c = Constraint::with_value("default", "'John Doe'");
        assert_eq!(c.to_string(), "default: 'John Doe'");
    }

    #[test]
    fn serde_skips_missing_value() {
        let json = serde_json::to_string(&Constraint::new("unique")).unwrap();
        assert_eq!(json, r#"{"name":"unique"}"#);
        let back: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, None);
    }
}
