//! Whole-line patterns for every construct of the language.
//!
//! Each pattern is anchored at both ends: a line either matches completely
//! or not at all. ASCII whitespace of any width is accepted wherever the
//! grammar allows a separator. Other Unicode spaces such as U+00A0 are
//! ordinary characters, never separators.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#name=value` with optional whitespace around every token.
pub(crate) static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[[:space:]]*([-A-Za-z_]+)[[:space:]]*=[[:space:]]*([A-Za-z0-9_]+)[[:space:]]*$")
        .expect("valid directive pattern")
});

/// `[name]` table header.
pub(crate) static TABLE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([-A-Za-z0-9_]+)\][[:space:]]*$").expect("valid table header pattern")
});

/// `name type` or `name type using requested type`. Only the requested
/// type may contain internal whitespace.
pub(crate) static COLUMN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([^-[:space:]]+?)[[:space:]]+([^[:space:]]+?)",
        r"(?:[[:space:]]+using[[:space:]]+([-A-Za-z0-9_]+.*?))?[[:space:]]*$",
    ))
    .expect("valid column pattern")
});

/// Any line introducing an alias or constraint under a column.
pub(crate) static SUB_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:space:]]*-").expect("valid sub-line pattern"));

/// `-alias: token`, single-word alias only.
pub(crate) static ALIAS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:space:]]*-[[:space:]]*alias[[:space:]]*:[[:space:]]*([^[:space:]]+?)[[:space:]]*$")
        .expect("valid alias pattern")
});

/// `-name` or `-name: value`. The name stops at the first `:`.
pub(crate) static CONSTRAINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[[:space:]]*-[[:space:]]*([^[:space:]].*?)",
        r"(?:[[:space:]]*:[[:space:]]*(.+?))?[[:space:]]*$",
    ))
    .expect("valid constraint pattern")
});

/// Sub-lines containing this word go to the alias rule.
pub(crate) const ALIAS_KEYWORD: &str = "alias";

/// How the top-level dispatcher treats a line, decided by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Blank,
    Hash,
    TableHeader,
    Other,
}

impl LineKind {
    pub(crate) fn classify(line: &str) -> Self {
        if is_blank(line) {
            Self::Blank
        } else if line.starts_with('#') {
            Self::Hash
        } else if line.starts_with('[') {
            Self::TableHeader
        } else {
            Self::Other
        }
    }

    /// Lines that belong to the top-level dispatcher and so close a table body.
    pub(crate) fn starts_top_level_construct(self) -> bool {
        matches!(self, Self::Hash | Self::TableHeader)
    }
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim_ascii().is_empty()
}
