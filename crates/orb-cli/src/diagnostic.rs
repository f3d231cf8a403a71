use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use orb_dsl::Diagnostic;

/// A parse diagnostic prepared for miette rendering.
///
/// Carries the source document so the offending line can be shown with a
/// label and a hint on how to fix it.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("line {line}: {message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{message}")]
    span: SourceSpan,

    line: usize,
    message: String,

    #[help]
    suggestion: Option<String>,
}

/// Byte range of a 1-based line in `source`, without its line terminator.
///
/// Lines past the end map to an empty span at the end of the input.
fn line_span(source: &str, line: usize) -> SourceSpan {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let len = text.trim_end_matches(|c| c == '\n' || c == '\r').len();
            return (offset, len).into();
        }
        offset += text.len();
    }
    (source.len(), 0).into()
}

/// Convert a parse `Diagnostic` into a miette `SchemaDiagnostic`.
pub fn to_schema_diagnostic(
    diagnostic: &Diagnostic,
    source: &str,
    filename: &str,
) -> SchemaDiagnostic {
    SchemaDiagnostic {
        src: NamedSource::new(filename, source.to_string()),
        span: line_span(source, diagnostic.line),
        line: diagnostic.line,
        message: diagnostic.message().to_string(),
        suggestion: Some(diagnostic.kind.help().to_string()),
    }
}

/// Render all diagnostics for one document using miette.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    source: &str,
    filename: &str,
) -> Vec<miette::Report> {
    diagnostics
        .iter()
        .map(|d| miette::Report::new(to_schema_diagnostic(d, source, filename)))
        .collect()
}

#[cfg(test)]
mod tests {
    use orb_dsl::DiagnosticKind;

    use super::*;

    #[test]
    fn line_span_covers_the_whole_line() {
        let source = "#db=pg\n[users]\nuid int\n";
        let span = line_span(source, 2);
        assert_eq!(span.offset(), 7);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn line_span_strips_crlf() {
        let source = "a\r\nbc\r\n";
        let span = line_span(source, 2);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn line_span_last_line_without_newline() {
        let source = "[t]\nbad";
        let span = line_span(source, 2);
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn line_span_past_end_is_empty() {
        let source = "[t]\n";
        let span = line_span(source, 5);
        assert_eq!(span.offset(), source.len());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn diagnostic_carries_message_and_help() {
        let source = "[users]\nuid\n";
        let diag = Diagnostic::new(DiagnosticKind::InvalidColumnDefinition, 2);
        let schema_diag = to_schema_diagnostic(&diag, source, "users.orb");
        assert_eq!(schema_diag.message, "invalid column definition");
        assert_eq!(schema_diag.line, 2);
        assert!(schema_diag
            .suggestion
            .as_deref()
            .unwrap()
            .contains("<name> <type>"));
        assert_eq!(
            schema_diag.to_string(),
            "line 2: invalid column definition"
        );
    }

    #[test]
    fn render_diagnostics_produces_reports() {
        let source = "oops\n[bad name]\n";
        let diags = vec![
            Diagnostic::new(DiagnosticKind::InvalidTokenOutsideTable, 1),
            Diagnostic::new(DiagnosticKind::InvalidTableName, 2),
        ];
        let reports = render_diagnostics(&diags, source, "doc.orb");
        assert_eq!(reports.len(), 2);
    }
}
