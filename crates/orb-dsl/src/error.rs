use std::fmt;

/// What went wrong on a diagnosed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// A `[...]` header whose name is not a valid table identifier.
    InvalidTableName,

    /// A line inside a table that is not `<name> <type> [using <type>]`.
    InvalidColumnDefinition,

    /// A sub-line mentioning `alias` that is not `-alias: <token>`.
    IllFormedAlias,

    /// A `-` sub-line with no constraint name.
    IllFormedConstraint,

    /// A non-blank top-level line that is neither a `#` line nor a table header.
    InvalidTokenOutsideTable,
}

impl DiagnosticKind {
    /// The human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidTableName => "invalid table name",
            Self::InvalidColumnDefinition => "invalid column definition",
            Self::IllFormedAlias => "ill-formed alias",
            Self::IllFormedConstraint => "ill-formed constraint",
            Self::InvalidTokenOutsideTable => "invalid token outside table definition",
        }
    }

    /// A hint on how to fix the offending line.
    pub fn help(self) -> &'static str {
        match self {
            Self::InvalidTableName => {
                "Table names may only contain letters, digits, '-' and '_', e.g. [user_accounts]."
            }
            Self::InvalidColumnDefinition => {
                "Columns are written as '<name> <type>' or '<name> <type> using <database type>'."
            }
            Self::IllFormedAlias => "Aliases are written as '-alias: <name>' with a single word.",
            Self::IllFormedConstraint => {
                "Constraints are written as '-<name>' or '-<name>: <value>'."
            }
            Self::InvalidTokenOutsideTable => {
                "Start a table with a '[name]' header, or prefix the line with '#' to comment it out."
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A parse-time error record: what went wrong and on which 1-based line.
///
/// Diagnostics never interrupt a parse; they are collected and returned
/// next to the best-effort tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize) -> Self {
        Self { line, kind }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.kind)
    }
}

impl std::error::Error for Diagnostic {}
