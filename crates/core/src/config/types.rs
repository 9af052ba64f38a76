use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct StorageSection {
    /// Directory holding one subdirectory per vault. Supports `~` expansion.
    pub base_path: Option<String>,
    /// Name of the vault created automatically when none exist.
    pub default_vault: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Optional log file; stderr logging is always on.
    pub file: Option<PathBuf>,
    /// Level for the file layer, falls back to `level`.
    pub file_level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level(), file: None, file_level: None }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Configuration after path expansion and defaulting.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_path: PathBuf,
    pub default_vault: String,
    pub logging: LoggingConfig,
}
