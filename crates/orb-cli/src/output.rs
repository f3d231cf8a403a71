use console::{Style, Term};
use orb_core::types::Tree;
use orb_dsl::{Diagnostic, Parsed};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostics;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    fn from_flag(format: &str) -> Self {
        match format {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Human,
        }
    }
}

/// One parsed document, ready to be reported.
pub struct Document<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub parsed: &'a Parsed,
}

/// Totals across every document of one `orb parse` run.
///
/// In JSON mode the per-document records are kept here until the run ends,
/// so stdout carries a single JSON value.
#[derive(Debug, Default)]
pub struct ParseSummary {
    pub documents: usize,
    pub tables: usize,
    pub diagnostics: usize,
    records: Vec<serde_json::Value>,
}

impl ParseSummary {
    fn count(&mut self, parsed: &Parsed) {
        self.documents += 1;
        self.tables += parsed.tree.tables.len();
        self.diagnostics += parsed.diagnostics.len();
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "files": self.documents,
            "tables": self.tables,
            "errors": self.diagnostics,
            "results": self.records,
        })
    }

    /// `documents<TAB>tables<TAB>diagnostics`, the plain-mode summary record.
    fn to_plain(&self) -> String {
        format!("{}\t{}\t{}", self.documents, self.tables, self.diagnostics)
    }
}

/// Where parse results go for the chosen `--format`.
///
/// Human mode writes miette reports and status lines to stderr and the
/// canonical tree to stdout. JSON mode writes one document to stdout at the
/// end of the run. Plain mode writes tab-separated diagnostics to stderr and
/// one summary record to stdout.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    /// Construct from global CLI options.
    ///
    /// Color needs a terminal on stderr, no `--no-color`/`NO_COLOR`, and a
    /// `TERM` other than `dumb`.
    pub fn from_global(global: &GlobalOpts) -> Self {
        let dumb_term = std::env::var("TERM").is_ok_and(|t| t == "dumb");
        Self {
            mode: OutputMode::from_flag(&global.format),
            quiet: global.quiet,
            use_color: !global.no_color && !dumb_term && Term::stderr().is_term(),
        }
    }

    /// Reject option combinations this mode cannot honor.
    ///
    /// The canonical tree is multi-line text, so it cannot share stdout with
    /// the single plain-mode summary record.
    pub fn check_print_tree(&self, print_tree: bool) -> Result<(), CliError> {
        if print_tree && self.mode == OutputMode::Plain {
            return Err(CliError::Usage(
                "--print cannot be combined with --format plain; use human or json".into(),
            ));
        }
        Ok(())
    }

    /// Report one parsed document and add it to `summary`.
    pub fn document(
        &self,
        summary: &mut ParseSummary,
        doc: &Document<'_>,
        print_tree: bool,
    ) -> Result<(), CliError> {
        summary.count(doc.parsed);

        match self.mode {
            OutputMode::Human => {
                if print_tree {
                    print!("{}", orb_dsl::print(&doc.parsed.tree));
                }
                for report in render_diagnostics(&doc.parsed.diagnostics, doc.source, doc.name) {
                    eprintln!("{report:?}");
                }
                if !self.quiet {
                    eprintln!(
                        "  {} .... {} tables, {} directives",
                        self.paint(doc.name, Style::new().cyan()),
                        doc.parsed.tree.tables.len(),
                        doc.parsed.tree.directives.len()
                    );
                }
            }
            OutputMode::Json => summary.records.push(document_json(doc, print_tree)?),
            OutputMode::Plain => {
                for diagnostic in &doc.parsed.diagnostics {
                    eprintln!("{}", plain_diagnostic(doc.name, diagnostic));
                }
            }
        }
        Ok(())
    }

    /// Write the end-of-run summary.
    pub fn summary(&self, summary: &ParseSummary) {
        match self.mode {
            OutputMode::Human => {
                if self.quiet {
                    return;
                }
                let line = format!(
                    "{} tables parsed from {} documents, {} errors",
                    summary.tables, summary.documents, summary.diagnostics
                );
                if summary.diagnostics == 0 {
                    eprintln!("{} {line}", self.paint("ok", Style::new().green().bold()));
                } else {
                    eprintln!(
                        "{} {line}",
                        self.paint("warning:", Style::new().yellow().bold())
                    );
                }
            }
            OutputMode::Json => match serde_json::to_string_pretty(&summary.to_json()) {
                Ok(text) => println!("{text}"),
                Err(e) => tracing::error!(error = %e, "failed to render JSON summary"),
            },
            OutputMode::Plain => println!("{}", summary.to_plain()),
        }
    }

    /// Print a command failure in the current mode.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {err}", self.paint("error:", Style::new().red().bold()));
            }
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn document_json(doc: &Document<'_>, print_tree: bool) -> Result<serde_json::Value, CliError> {
    let tree = &doc.parsed.tree;
    let mut record = serde_json::json!({
        "file": doc.name,
        "tables": tree.tables.len(),
        "directives": tree.directives.len(),
        "tree": tree_json(tree)?,
        "diagnostics": doc.parsed.diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
    });
    if print_tree {
        record["printed"] = serde_json::Value::String(orb_dsl::print(tree));
    }
    Ok(record)
}

fn tree_json(tree: &Tree) -> Result<serde_json::Value, CliError> {
    serde_json::to_value(tree).map_err(|e| CliError::Other(format!("failed to serialize tree: {e}")))
}

fn diagnostic_json(diagnostic: &Diagnostic) -> serde_json::Value {
    serde_json::json!({
        "line": diagnostic.line,
        "message": diagnostic.message(),
    })
}

fn plain_diagnostic(name: &str, diagnostic: &Diagnostic) -> String {
    format!("{name}\t{}\t{}", diagnostic.line, diagnostic.message())
}
