//! Configuration module for the ticket intake application
//!
//! This module handles:
//! - Application state persistence (selected language)
//! - The optional `config.toml` with i18n and form tuning
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.ticket-intake/`
//! - **macOS**: `~/Library/Application Support/dev.ticket-intake/`
//! - **Windows**: `%APPDATA%\dev.ticket-intake\`
//!
//! # Files
//!
//! - `app_state.json` - Last selected language (`i18nextLng`)
//! - `config.toml` - Optional overrides; every key has a default
//! - `logs/` - Daily rolling log files
//!
//! # Example
//!
//! ```ignore
//! use ticket_intake::config::{AppConfig, AppState};
//!
//! let config = AppConfig::load_or_default();
//! let mut state = AppState::load_or_default();
//!
//! state.language = Some("ru".to_string());
//! state.save()?;
//! ```

use crate::error::{IntakeError, Result, ResultExt};
use crate::i18n::catalog::DEFAULT_LOAD_PATH;
use crate::i18n::{DetectionSource, Language, LanguageCache};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application identifier for data directories
pub const APP_ID: &str = "dev.ticket-intake";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Log directory name (inside the app data directory)
pub const LOG_DIR: &str = "logs";

/// Key under which the selected language is persisted
pub const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

/// Default simulated submission latency in milliseconds
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1000;

/// Default time the confirmation panel stays visible in milliseconds
pub const DEFAULT_CONFIRMATION_TIMEOUT_MS: u64 = 3000;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        IntakeError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            IntakeError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== App State ====================

/// Persistent application state
///
/// Plays the role of browser local storage: the detected or selected
/// language survives restarts under the `i18nextLng` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_version")]
    pub version: u32,

    /// Last detected or selected language code
    #[serde(rename = "i18nextLng", default)]
    pub language: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            language: None,
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            IntakeError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load app state from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read app state")?;
        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).context("Failed to write app state")
    }
}

impl LanguageCache for AppState {
    fn cached_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn cache_language(&mut self, language: Language) {
        self.language = Some(language.code().to_string());
    }
}

// ==================== App Config ====================

/// Static configuration read from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub i18n: I18nConfig,
    pub form: FormConfig,
}

impl AppConfig {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            IntakeError::Config("Could not determine config path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            IntakeError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Invalid config file {:?}", path)))
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| IntakeError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }
}

/// Language detection and catalog loading settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used when detection finds nothing and for missing keys
    pub fallback_language: Language,

    /// Detection sources, first match wins
    pub detection_order: Vec<DetectionSource>,

    /// Where the detected language is persisted
    pub caches: Vec<DetectionSource>,

    /// Base directory the load path is resolved against
    pub assets_dir: PathBuf,

    /// Catalog path template; `{{lng}}` is the language code
    pub load_path: String,

    /// Language of the document, used by the `htmlTag` source
    pub document_language: Option<String>,

    /// Report missing translation keys loudly
    pub debug: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            fallback_language: Language::Hebrew,
            detection_order: DetectionSource::default_order(),
            caches: vec![DetectionSource::LocalStorage],
            assets_dir: PathBuf::from("."),
            load_path: DEFAULT_LOAD_PATH.to_string(),
            document_language: Some(Language::Hebrew.code().to_string()),
            debug: true,
        }
    }
}

impl I18nConfig {
    /// The assets directory as used at runtime.
    ///
    /// A relative `assets_dir` is taken from the directory holding the
    /// executable, so catalogs are found regardless of the working directory.
    pub fn resolved_assets_dir(&self) -> PathBuf {
        let exe = std::env::current_exe().ok();
        resolve_against_exe(&self.assets_dir, exe.as_deref())
    }
}

fn resolve_against_exe(dir: &Path, exe: Option<&Path>) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match exe.and_then(Path::parent) {
        Some(base) => base.join(dir),
        None => dir.to_path_buf(),
    }
}

/// Ticket form timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Latency of the simulated submission in milliseconds
    pub submission_delay_ms: u64,

    /// How long the confirmation panel stays visible in milliseconds
    pub confirmation_timeout_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            confirmation_timeout_ms: DEFAULT_CONFIRMATION_TIMEOUT_MS,
        }
    }
}

impl FormConfig {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_millis(self.confirmation_timeout_ms)
    }
}

// ==================== Tests ====================
