//! Extension configuration.
//!
//! Loaded from `~/.config/tickbeat/config.toml`. Missing sections fall
//! back to defaults thanks to `#[serde(default)]`; a missing file
//! silently yields the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration for the tickbeat extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared log facility settings.
    pub log: LogConfig,
}

/// Returns the config directory: `~/.config/tickbeat/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("tickbeat"))
}

/// Returns the config file path: `~/.config/tickbeat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are
/// printed as warnings.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("No such file")
        || e.contains("cannot find the path")
        || e.contains("The system cannot find")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_file_mb, 10);
    }

    #[test]
    fn partial_log_section_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [log]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();

        assert!(config.log.enabled);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.max_file_mb, 10);
    }
}
