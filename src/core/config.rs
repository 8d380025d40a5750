//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub stale_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_STALE_MS: u64 = 2000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub page_size: u32,
    pub stale_ms: u64,
}

/// CLI-level overrides, the last layer of the hierarchy.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub stale_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Collapse the hierarchy into concrete values:
/// defaults → config file → `FOLIO_BASE_URL` env var → CLI flags.
pub fn resolve(config: FolioConfig, overrides: Overrides) -> ResolvedConfig {
    let env_base_url = std::env::var("FOLIO_BASE_URL").ok();

    ResolvedConfig {
        base_url: overrides
            .base_url
            .or(env_base_url)
            .or(config.general.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        page_size: overrides
            .page_size
            .or(config.general.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE),
        stale_ms: overrides
            .stale_ms
            .or(config.general.stale_ms)
            .unwrap_or(DEFAULT_STALE_MS),
    }
}

/// Write a fully commented-out default config so users can discover options.
fn generate_default_config(path: &PathBuf) {
    let template = format!(
        "# Folio configuration\n\
         # Uncomment a line to override the default.\n\
         \n\
         [general]\n\
         # base_url = \"{DEFAULT_BASE_URL}\"\n\
         # page_size = {DEFAULT_PAGE_SIZE}\n\
         # stale_ms = {DEFAULT_STALE_MS}\n"
    );

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Could not create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, template) {
        warn!("Could not write default config: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_toml_parses() {
        let config: FolioConfig = toml::from_str(
            "[general]\n\
             page_size = 25\n",
        )
        .unwrap();
        assert_eq!(config.general.page_size, Some(25));
        assert!(config.general.base_url.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert!(config.general.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults() {
        let resolved = resolve(FolioConfig::default(), Overrides::default());
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.stale_ms, DEFAULT_STALE_MS);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = FolioConfig {
            general: GeneralConfig {
                base_url: Some("http://localhost:3000".into()),
                page_size: None,
                stale_ms: Some(500),
            },
        };
        let resolved = resolve(config, Overrides::default());
        assert_eq!(resolved.base_url, "http://localhost:3000");
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.stale_ms, 500);
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = FolioConfig {
            general: GeneralConfig {
                base_url: Some("http://from-file".into()),
                page_size: Some(10),
                stale_ms: None,
            },
        };
        let overrides = Overrides {
            base_url: Some("http://from-cli".into()),
            page_size: Some(5),
            stale_ms: None,
        };
        let resolved = resolve(config, overrides);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.page_size, 5);
    }
}
