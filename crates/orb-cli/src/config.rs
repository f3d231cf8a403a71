use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub cli: CliSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// CLI-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    /// File extension searched for when a directory is given to `orb parse`.
    #[serde(default = "default_schema_extension")]
    pub schema_extension: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            schema_extension: default_schema_extension(),
        }
    }
}

impl CliSettings {
    /// The extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.schema_extension.trim_start_matches('.')
    }
}

/// Log output settings, overridden by `-v`/`-q` and `RUST_LOG`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_schema_extension() -> String {
    "orb".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `ORB_CONFIG` env var
/// 3. `./orb.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/orb/config.toml`
/// 5. `~/.config/orb/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var("ORB_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("orb.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("orb/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/orb/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}
