//! Contact Book - Main entry point
//!
//! Runs the interactive contact menu on stdin/stdout against the CSV file
//! named by the configuration.

use anyhow::{Context, Result};
use contact_book::repositories::{ContactRepository, CsvContactRepository};
use contact_book::{Config, ContactService, Controller};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the default filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout carries the prompts)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let contacts = CsvContactRepository::new(&config.contacts_file);
    if contacts.ensure_exists().with_context(|| {
        format!("cannot create {}", config.contacts_file.display())
    })? {
        info!("Created {}", config.contacts_file.display());
    }

    let contact_repo = Arc::new(contacts) as Arc<dyn ContactRepository>;
    let export_repo =
        Arc::new(CsvContactRepository::new(&config.export_file)) as Arc<dyn ContactRepository>;
    let service = ContactService::new(contact_repo, export_repo, config.name_validation);

    info!(
        "Starting contact book on {} (names: {:?})",
        config.contacts_file.display(),
        config.name_validation
    );

    let stdin = io::stdin();
    let mut controller = Controller::new(service, stdin.lock(), io::stdout());
    if let Err(e) = controller.run() {
        error!("Contact book stopped: {}", e);
        return Err(e.into());
    }

    info!("Contact book session ended");
    Ok(())
}
