use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::{data_dir, home_dir};
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path, or from the default
    /// location. A missing explicit path is an error; a missing default
    /// config resolves to built-in defaults.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let (path, explicit) = match config_path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            return Ok(Self::defaults());
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let base_path = match &cf.storage.base_path {
            Some(p) => expand_path(p)?,
            None => default_base_path(),
        };

        let default_vault = cf
            .storage
            .default_vault
            .clone()
            .unwrap_or_else(|| "Notes".to_string());

        Ok(ResolvedConfig { base_path, default_vault, logging: cf.logging })
    }

    /// Built-in configuration used when no config file exists.
    pub fn defaults() -> ResolvedConfig {
        ResolvedConfig {
            base_path: default_base_path(),
            default_vault: "Notes".to_string(),
            logging: Default::default(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("inkvault").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("inkvault").join("config.toml")
}

/// Default directory holding vault storage roots.
pub fn default_base_path() -> PathBuf {
    data_dir().unwrap_or_else(|| PathBuf::from(".")).join("inkvault").join("vaults")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "version = 1\n\n[storage]\nbase_path = \"{}\"\ndefault_vault = \"Inbox\"",
            dir.path().join("vaults").display()
        )
        .unwrap();

        let rc = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(rc.base_path, dir.path().join("vaults"));
        assert_eq!(rc.default_vault, "Inbox");
        assert_eq!(rc.logging.level, "info");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/ikv.toml")));
        assert!(matches!(err, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_bad_version_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 2\n").unwrap();

        let err = ConfigLoader::load(Some(&path));
        assert!(matches!(err, Err(ConfigError::BadVersion(2))));
    }

    #[test]
    fn test_defaults_when_no_sections() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 1\n").unwrap();

        let rc = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(rc.default_vault, "Notes");
    }
}
