//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\lyric-minder\config.toml
//! - macOS: ~/Library/Application Support/lyric-minder/config.toml
//! - Linux: ~/.config/lyric-minder/config.toml
//!
//! The config file is human-readable and editable. Command-line flags
//! override individual values for a single run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata service settings
    pub musicbrainz: MusicBrainzConfig,

    /// Lyrics service settings
    pub lyrics: LyricsConfig,

    /// Shared HTTP and retry settings
    pub http: HttpConfig,

    /// Console report settings
    pub output: OutputConfig,
}

/// MusicBrainz settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicBrainzConfig {
    /// API root
    pub base_url: String,

    /// Recordings per search page, cut to 100, the most the API returns
    pub page_size: usize,

    /// Recording pages fetched at once
    pub max_concurrent_requests: usize,

    /// Contact URL or email sent in the User-Agent, as MusicBrainz asks
    pub contact: String,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            page_size: 100,
            max_concurrent_requests: 4,
            contact: "https://github.com/lyric-minder".to_string(),
        }
    }
}

/// lyrics.ovh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// API root
    pub base_url: String,

    /// Lyrics lookups in flight at once
    pub max_concurrent_requests: usize,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.lyrics.ovh/v1".to_string(),
            max_concurrent_requests: 8,
        }
    }
}

/// HTTP timeout and retry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout
    pub timeout_secs: u64,

    /// Attempts per request, including the first
    pub max_tries: u32,

    /// First retry delay; doubles on each attempt
    pub initial_backoff_ms: u64,

    /// Upper bound for a single retry delay
    pub max_backoff_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_tries: 10,
            initial_backoff_ms: 500,
            max_backoff_ms: 16_000,
        }
    }
}

/// Console report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Artist candidates requested from the search
    pub search_limit: usize,

    /// Print spread, shortest and longest song after the average
    pub show_statistics: bool,

    /// Print elapsed time per stage
    pub show_timing: bool,

    /// Print word counts ordered by release date
    pub show_timeline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            search_limit: 3,
            show_statistics: false,
            show_timing: false,
            show_timeline: false,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lyric-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

impl From<ConfigError> for crate::error::Error {
    fn from(err: ConfigError) -> Self {
        crate::error::Error::config(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
