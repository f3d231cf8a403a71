use std::io::BufRead;

use orb_core::types::{Column, ColumnName, Constraint, Table, TableName, Tree};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{Diagnostic, DiagnosticKind};
use crate::grammar::{
    LineKind, ALIAS, ALIAS_KEYWORD, COLUMN, CONSTRAINT, DIRECTIVE, SUB_LINE, TABLE_HEADER,
};

/// What a grammar rule produced: the value, if the construct matched, and
/// every diagnostic raised while reading it.
///
/// A rule can yield a value and diagnostics at the same time: a column
/// whose constraint line is malformed is still returned, minus that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome<T> {
    pub value: Option<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> RuleOutcome<T> {
    fn matched(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            value: Some(value),
            diagnostics,
        }
    }

    fn failed(kind: DiagnosticKind, cursor: &Cursor) -> Self {
        Self {
            value: None,
            diagnostics: vec![Diagnostic::new(kind, cursor.line_number())],
        }
    }

    /// True when the rule raised no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The result of parsing a whole document: the best-effort tree and every
/// diagnostic collected along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub tree: Tree,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    /// True when the document produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The tree if the document was clean, otherwise its diagnostics.
    pub fn into_result(self) -> Result<Tree, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.tree)
        } else {
            Err(self.diagnostics)
        }
    }
}

// -- Leaf rules --

/// directive = "#" NAME "=" VALUE
///
/// Consumes one line. Returns `None` for any `#` line that is not a
/// well-formed directive; such lines are ordinary comments.
pub fn parse_directive(cursor: &mut Cursor) -> Option<(String, String)> {
    cursor.advance();
    let caps = DIRECTIVE.captures(cursor.current())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// alias = "-" "alias" ":" TOKEN
///
/// Consumes one line.
pub fn parse_alias(cursor: &mut Cursor) -> RuleOutcome<String> {
    cursor.advance();
    match ALIAS.captures(cursor.current()) {
        Some(caps) => RuleOutcome::matched(caps[1].to_string(), Vec::new()),
        None => RuleOutcome::failed(DiagnosticKind::IllFormedAlias, cursor),
    }
}

/// constraint = "-" NAME (":" VALUE)?
///
/// Consumes one line. The name may contain spaces; the value runs to the
/// end of the line.
pub fn parse_constraint(cursor: &mut Cursor) -> RuleOutcome<Constraint> {
    cursor.advance();
    let Some(caps) = CONSTRAINT.captures(cursor.current()) else {
        return RuleOutcome::failed(DiagnosticKind::IllFormedConstraint, cursor);
    };

    let name = caps[1].trim_ascii();
    if name.is_empty() {
        return RuleOutcome::failed(DiagnosticKind::IllFormedConstraint, cursor);
    }

    let constraint = match caps.get(2).map(|m| m.as_str().trim_ascii()) {
        Some(value) if !value.is_empty() => Constraint::with_value(name, value),
        _ => Constraint::new(name),
    };
    RuleOutcome::matched(constraint, Vec::new())
}

// -- Composite rules --

/// column = NAME TYPE ("using" REQUESTED_TYPE)? (alias | constraint)*
///
/// Consumes the first line whether or not it matches. After a match, every
/// following `-` line is consumed as an alias or constraint; the first line
/// that is not a sub-line is left for the caller.
pub fn parse_column(cursor: &mut Cursor) -> RuleOutcome<Column> {
    cursor.advance();
    let Some(caps) = COLUMN.captures(cursor.current()) else {
        return RuleOutcome::failed(DiagnosticKind::InvalidColumnDefinition, cursor);
    };
    let Ok(name) = ColumnName::new(&caps[1]) else {
        return RuleOutcome::failed(DiagnosticKind::InvalidColumnDefinition, cursor);
    };

    let mut column = Column::new(name, &caps[2]);
    column.requested_type = caps.get(3).map(|m| m.as_str().trim_ascii().to_string());
    let mut diagnostics = Vec::new();

    while cursor.advance() {
        let line = cursor.current();
        if !SUB_LINE.is_match(line) {
            cursor.backtrack();
            break;
        }
        let is_alias = line.contains(ALIAS_KEYWORD);
        cursor.backtrack();

        if is_alias {
            // An ill-formed alias still overwrites: it leaves the column unaliased.
            let outcome = parse_alias(cursor);
            column.alias = outcome.value;
            diagnostics.extend(outcome.diagnostics);
        } else {
            let outcome = parse_constraint(cursor);
            if let Some(constraint) = outcome.value {
                column.constraints.push(constraint);
            }
            diagnostics.extend(outcome.diagnostics);
        }
    }

    trace!(
        column = %column.name,
        constraints = column.constraints.len(),
        diagnostics = diagnostics.len(),
        "parsed column"
    );
    RuleOutcome::matched(column, diagnostics)
}

/// table = "[" NAME "]" column* (blank | EOF)?
///
/// An invalid header consumes only the header line and yields no table.
/// The body ends at a blank line (consumed), at a `[` or `#` line (left
/// for the caller), or at end of input. Column diagnostics are collected
/// without stopping the body.
pub fn parse_table(cursor: &mut Cursor) -> RuleOutcome<Table> {
    cursor.advance();
    let Some(caps) = TABLE_HEADER.captures(cursor.current()) else {
        return RuleOutcome::failed(DiagnosticKind::InvalidTableName, cursor);
    };
    let Ok(name) = TableName::new(&caps[1]) else {
        return RuleOutcome::failed(DiagnosticKind::InvalidTableName, cursor);
    };

    let mut table = Table::new(name);
    let mut diagnostics = Vec::new();

    while cursor.advance() {
        let kind = LineKind::classify(cursor.current());
        if kind == LineKind::Blank {
            break;
        }
        cursor.backtrack();
        if kind.starts_top_level_construct() {
            break;
        }

        let outcome = parse_column(cursor);
        if let Some(column) = outcome.value {
            table.columns.push(column);
        }
        diagnostics.extend(outcome.diagnostics);
    }

    trace!(
        table = %table.name,
        columns = table.columns.len(),
        diagnostics = diagnostics.len(),
        "parsed table"
    );
    RuleOutcome::matched(table, diagnostics)
}

// -- Assembler --

/// document = (blank | directive | comment | table)*
fn parse_document(mut cursor: Cursor) -> Parsed {
    debug!(lines = cursor.len(), "parsing document");
    let mut tree = Tree::new();
    let mut diagnostics = Vec::new();

    while cursor.advance() {
        match LineKind::classify(cursor.current()) {
            LineKind::Blank => {}
            LineKind::Hash => {
                cursor.backtrack();
                match parse_directive(&mut cursor) {
                    Some((name, value)) => tree.set_directive(name, value),
                    None => trace!(line = cursor.line_number(), "skipping comment"),
                }
            }
            LineKind::TableHeader => {
                cursor.backtrack();
                let outcome = parse_table(&mut cursor);
                if outcome.is_clean() {
                    tree.tables.extend(outcome.value);
                } else {
                    // A table with any diagnostic is left out of the tree entirely.
                    debug!(
                        table = ?outcome.value.as_ref().map(|t| t.name.as_str()),
                        diagnostics = outcome.diagnostics.len(),
                        "discarding table"
                    );
                    diagnostics.extend(outcome.diagnostics);
                }
            }
            LineKind::Other => {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::InvalidTokenOutsideTable,
                    cursor.line_number(),
                ));
            }
        }
    }

    debug!(
        directives = tree.directives.len(),
        tables = tree.tables.len(),
        diagnostics = diagnostics.len(),
        "parsed document"
    );
    Parsed { tree, diagnostics }
}

/// Parse a document into a tree plus diagnostics.
///
/// Parsing never stops at the first problem: every line is visited and
/// the returned [`Parsed`] holds the best tree that could be built next to
/// the full list of diagnostics. Callers decide which diagnostics are
/// fatal for them.
pub fn parse(source: &str) -> Parsed {
    parse_document(Cursor::new(source))
}

/// Read `reader` to the end and parse it like [`parse`].
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read. Grammar problems are
/// never errors here; they are reported as diagnostics.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<Parsed> {
    let cursor = Cursor::from_reader(reader)?;
    Ok(parse_document(cursor))
}
