//! Workspace configuration: TOML file discovery, parsing and defaulting.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_base_path, default_config_path};
pub use types::{ConfigFile, LoggingConfig, ResolvedConfig, StorageSection};
