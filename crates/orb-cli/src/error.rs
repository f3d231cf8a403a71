use std::path::PathBuf;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments, configuration, or missing inputs
/// - 3: the documents produced parse diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Parsing finished but reported diagnostics. They have already been
    /// rendered by the time this error is returned.
    #[error("{count} parse diagnostic(s) reported")]
    Parse { count: usize },

    /// IO errors (file not found, permission denied, invalid UTF-8).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Options that cannot be used together.
    #[error("{0}")]
    Usage(String),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Path was neither a file nor a directory containing schema files.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Usage(_) | Self::Config { .. } | Self::NoSchemaFiles { .. } => {
                ExitCode::InvalidArguments
            }
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { count } => serde_json::json!({
                "error": "parse_error",
                "diagnostics": count,
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Usage(message) => serde_json::json!({
                "error": "usage_error",
                "message": message,
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
