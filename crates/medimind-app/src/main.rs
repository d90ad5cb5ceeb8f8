//! MediMind application binary - composition root.
//!
//! 1. Parse the command line and load configuration from TOML
//! 2. Load the disease dataset once and share it by handle
//! 3. Dispatch to the terminal host, the HTTP server or config setup

mod cli;
mod terminal;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;

use medimind_api::{start_server, AppState};
use medimind_chat::ChatOrchestrator;
use medimind_core::config::{application_dir, DataConfig, MedimindConfig};
use medimind_core::{Dataset, MedimindError};
use medimind_ui::Stylesheet;

use cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the log level can come from it;
    // a load failure is reported once the subscriber is up.
    let config_path = args.resolve_config_path();
    let loaded = if config_path.exists() {
        Some(MedimindConfig::load(&config_path))
    } else {
        None
    };
    let (mut config, load_error) = match loaded {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (MedimindConfig::default(), Some(e)),
        None => (MedimindConfig::default(), None),
    };
    args.apply_overrides(&mut config);

    // Tracing. Logs go to stderr so terminal output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting MediMind v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!(
            path = %config_path.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => tracing::debug!(path = %config_path.display(), "Config path resolved"),
    }

    let base = application_dir();
    let mut stdout = tokio::io::stdout();
    match args.command {
        Command::Symptoms => {
            let dataset = load_dataset(&config.data, &base)?;
            terminal::print_symptoms(&dataset, &mut stdout).await?;
        }
        Command::Search { ref symptom } => {
            let dataset = load_dataset(&config.data, &base)?;
            terminal::print_search(&dataset, symptom, &mut stdout).await?;
        }
        Command::Chat => {
            let dataset = load_dataset(&config.data, &base)?;
            let orchestrator = ChatOrchestrator::new(dataset, &config.chat);
            let delay = Duration::from_millis(config.chat.reveal_delay_ms);
            let stdin = BufReader::new(tokio::io::stdin());
            terminal::run_chat(&orchestrator, delay, stdin, &mut stdout).await?;
        }
        Command::Serve { .. } => {
            let dataset = load_dataset(&config.data, &base)?;
            let stylesheet = Stylesheet::load(&config.data.stylesheet_file(&base));
            let state = AppState::new(config, dataset, &stylesheet);
            start_server(state).await?;
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                return Err(format!(
                    "{} already exists, pass --force to overwrite",
                    config_path.display()
                )
                .into());
            }
            config.save(&config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

/// Load the dataset once; every consumer shares the returned handle.
fn load_dataset(data: &DataConfig, base: &Path) -> Result<Arc<Dataset>, MedimindError> {
    let path = data.dataset_file(base);
    match Dataset::load(&path) {
        Ok(dataset) => Ok(Arc::new(dataset)),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load dataset");
            Err(e)
        }
    }
}
