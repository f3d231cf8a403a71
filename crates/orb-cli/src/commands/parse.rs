use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::ParseArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{Document, OutputContext, ParseSummary};

/// Where a schema document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SchemaSource {
    Stdin,
    File(PathBuf),
}

impl SchemaSource {
    fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .map_err(|e| CliError::Io {
                        path: PathBuf::from("<stdin>"),
                        source: e,
                    })?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            }),
        }
    }
}

/// Run the `parse` command: parse schema documents and report diagnostics.
pub fn run(args: ParseArgs, config: &CliConfig, output: &OutputContext) -> Result<(), CliError> {
    output.check_print_tree(args.print_tree)?;
    let sources = discover_sources(&args.paths, config.cli.extension())?;
    tracing::info!(count = sources.len(), "parsing schema documents");

    let mut summary = ParseSummary::default();
    for source in &sources {
        let text = source.read()?;
        let name = source.display_name();
        let parsed = orb_dsl::parse(&text);
        let doc = Document {
            name: &name,
            source: &text,
            parsed: &parsed,
        };
        output.document(&mut summary, &doc, args.print_tree)?;
    }
    output.summary(&summary);

    if summary.diagnostics > 0 {
        Err(CliError::Parse {
            count: summary.diagnostics,
        })
    } else {
        Ok(())
    }
}

/// Resolve command-line paths into schema sources.
///
/// No paths, or a `-` path, means standard input. Files are used directly;
/// directories are searched recursively for `**/*.<extension>`.
fn discover_sources(paths: &[PathBuf], extension: &str) -> Result<Vec<SchemaSource>, CliError> {
    if paths.is_empty() {
        return Ok(vec![SchemaSource::Stdin]);
    }

    let mut read_stdin = false;
    let mut files = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            read_stdin = true;
        } else if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(find_schema_files(path, extension)?);
        } else {
            return Err(CliError::NoSchemaFiles { path: path.clone() });
        }
    }

    if files.is_empty() && !read_stdin {
        let display_path = paths.first().cloned().unwrap_or_default();
        return Err(CliError::NoSchemaFiles { path: display_path });
    }

    files.sort();
    files.dedup();

    let mut sources = Vec::with_capacity(files.len() + 1);
    if read_stdin {
        sources.push(SchemaSource::Stdin);
    }
    sources.extend(files.into_iter().map(SchemaSource::File));
    Ok(sources)
}

fn find_schema_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CliError> {
    let pattern = format!("{}/**/*.{extension}", dir.display());
    let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
    entries
        .map(|entry| entry.map_err(|e| CliError::Other(e.to_string())))
        .collect()
}
