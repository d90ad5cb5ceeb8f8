use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Top-level configuration for MediMind.
///
/// Loaded from `~/.medimind/config.toml` by default. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedimindConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl MedimindConfig {
    /// Read and parse `path`. Read and parse failures are both errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MedimindConfig = toml::from_str(&content)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Write this configuration to `path` as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }
}

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Location of the dataset and stylesheet files.
///
/// Relative paths are resolved against the directory holding the
/// executable, see [`DataConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dataset_path: String,
    pub stylesheet_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: "dataset.csv".to_string(),
            stylesheet_path: "style.css".to_string(),
        }
    }
}

impl DataConfig {
    /// Resolve a configured path against `base_dir` unless it is absolute.
    pub fn resolve(base_dir: &Path, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    pub fn dataset_file(&self, base_dir: &Path) -> PathBuf {
        Self::resolve(base_dir, &self.dataset_path)
    }

    pub fn stylesheet_file(&self, base_dir: &Path) -> PathBuf {
        Self::resolve(base_dir, &self.stylesheet_path)
    }
}

/// Chat surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay between two reveal frames, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Maximum message length in characters.
    pub max_message_length: usize,
    /// HTTP chat sessions idle for this many seconds are dropped.
    pub session_ttl_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 50,
            max_message_length: 2000,
            session_ttl_secs: 1800,
        }
    }
}

/// HTTP host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8501 }
    }
}

/// Directory of the running executable, or the working directory if that
/// cannot be determined.
pub fn application_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
