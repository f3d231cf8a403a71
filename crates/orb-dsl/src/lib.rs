//! # orb-dsl
//!
//! Parser and printer for the orb schema language.
//!
//! A document is a sequence of lines: `#key=value` directives, `#`
//! comments, and `[table]` blocks whose lines declare typed columns
//! followed by `-` alias and constraint lines:
//!
//! ```text
//! #database=postgres
//! [users]
//! uid int using SERIAL
//! -primary key
//! -alias: id
//! name string
//! -not null
//! ```
//!
//! This crate provides:
//! - A [`Cursor`] that buffers the input lines and allows one line of pushback
//! - Whole-line grammar rules for directives, tables, columns, aliases and constraints
//! - A fail-slow [`parse`] that returns the best-effort tree next to every diagnostic
//! - A [`print`]er whose output parses back to an equal tree
//!
//! # Example
//!
//! ```
//! use orb_dsl::{parse, print};
//!
//! let parsed = parse("#database=postgres\n[users]\nuid int\n-primary key\n");
//! assert!(parsed.is_clean());
//! assert_eq!(parsed.tree.directive("database"), Some("postgres"));
//! assert_eq!(parsed.tree.tables[0].columns[0].name.as_str(), "uid");
//!
//! let text = print(&parsed.tree);
//! assert!(text.contains("[users]"));
//! ```

pub mod cursor;
pub mod error;
mod grammar;
pub mod parser;
pub mod printer;

pub use cursor::Cursor;
pub use error::{Diagnostic, DiagnosticKind};
pub use parser::{
    parse, parse_alias, parse_column, parse_constraint, parse_directive, parse_reader,
    parse_table, Parsed, RuleOutcome,
};
pub use printer::{print, print_table};
