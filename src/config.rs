use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory holding the config file, relative to the home directory
pub const CONFIG_DIR: &str = ".taskdeck";
pub const CONFIG_FILE: &str = "config.json";

/// Settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Type tag the input form starts with (and resets to)
    pub default_type: String,
    /// chrono format for activity log time labels
    pub log_time_format: String,
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_type: "simple".to_string(),
            log_time_format: "%H:%M:%S".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

/// Default config path: ~/.taskdeck/config.json
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from a file. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DeckConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(DeckConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write config atomically (temp file in the same directory, then rename)
pub fn save_config<P: AsRef<Path>>(path: P, config: &DeckConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp_file.write_all(json.as_bytes()).map_err(io_err)?;
    temp_file.as_file().sync_all().map_err(io_err)?;
    temp_file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Write a default config, refusing to overwrite an existing file
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<DeckConfig, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let config = DeckConfig::default();
    save_config(path, &config)?;
    Ok(config)
}
