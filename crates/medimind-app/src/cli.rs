//! CLI argument definitions for the MediMind application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use medimind_core::config::MedimindConfig;

/// MediMind - symptom lookup with a search widget and a scripted chat assistant.
#[derive(Parser, Debug)]
#[command(name = "medimind", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the disease dataset CSV.
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<PathBuf>,

    /// Path to the optional page stylesheet.
    #[arg(short = 's', long = "stylesheet", global = true)]
    pub stylesheet: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the symptom vocabulary, one keyword per line.
    Symptoms,
    /// Look up diseases whose symptoms contain SYMPTOM.
    Search {
        symptom: String,
    },
    /// Chat with the assistant in the terminal.
    Chat,
    /// Serve the page and JSON API over HTTP.
    Serve {
        /// HTTP port.
        #[arg(short = 'p', long = "port")]
        port: Option<u16>,
    },
    /// Write the effective configuration to the config path.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MEDIMIND_CONFIG env var > ~/.medimind/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MEDIMIND_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Fold CLI overrides into the loaded configuration.
    ///
    /// Paths given on the command line are taken relative to the working
    /// directory, unlike configured paths.
    pub fn apply_overrides(&self, config: &mut MedimindConfig) {
        if let Some(ref p) = self.dataset {
            config.data.dataset_path = absolutize(p).to_string_lossy().to_string();
        }
        if let Some(ref p) = self.stylesheet {
            config.data.stylesheet_path = absolutize(p).to_string_lossy().to_string();
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if let Command::Serve { port: Some(port) } = self.command {
            config.server.port = port;
        }
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".medimind").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".medimind").join("config.toml");
    }
    PathBuf::from("config.toml")
}
