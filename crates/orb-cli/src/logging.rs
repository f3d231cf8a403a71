use tracing_subscriber::EnvFilter;

use crate::cli::GlobalOpts;
use crate::config::LoggingSettings;

/// Picks the filter directive from the verbosity flags, falling back to the
/// configured level.
pub fn level_directive<'a>(global: &GlobalOpts, settings: &'a LoggingSettings) -> &'a str {
    if global.quiet {
        return "error";
    }
    match global.verbose {
        0 => settings.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr `fmt` subscriber. `RUST_LOG` wins over the flags.
pub fn init(global: &GlobalOpts, settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(global, settings)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(verbose: u8, quiet: bool) -> GlobalOpts {
        GlobalOpts {
            config: None,
            format: "human".into(),
            verbose,
            quiet,
            no_color: true,
        }
    }

    #[test]
    fn default_level_comes_from_config() {
        let settings = LoggingSettings {
            level: "info".into(),
        };
        assert_eq!(level_directive(&global(0, false), &settings), "info");
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let settings = LoggingSettings::default();
        assert_eq!(level_directive(&global(1, false), &settings), "info");
        assert_eq!(level_directive(&global(2, false), &settings), "debug");
        assert_eq!(level_directive(&global(3, false), &settings), "trace");
        assert_eq!(level_directive(&global(9, false), &settings), "trace");
    }

    #[test]
    fn quiet_only_shows_errors() {
        let settings = LoggingSettings::default();
        assert_eq!(level_directive(&global(0, true), &settings), "error");
    }
}
