//! Roster application root.
//!
//! Opens the file-backed store, initializes the collection and prints the current view.

use roster::storage::{EmployeeStorage, FileStore};
use roster::{CollectionStore, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting roster");
    tracing::info!("Data directory: {:?}", config.data_dir);

    let storage = EmployeeStorage::new(FileStore::open(config.data_dir.clone()));
    let store = CollectionStore::initialize(storage);

    tracing::info!("{} employees, {} visible", store.list().len(), store.view().len());
    println!("{}", serde_json::to_string_pretty(store.view())?);

    Ok(())
}
