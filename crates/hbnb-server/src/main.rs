//! HBNB Server
//!
//! Serves the states listing from whichever storage backend the
//! environment selects (JSON file or relational database).

mod handlers;
mod settings;
mod storage;
mod views;

use anyhow::{Context, Result};
use hbnb_core::Store;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use settings::{Settings, StorageBackend};
use storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Store>,
}

/// Route panics through tracing so a crashed request shows up in the log.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        eprintln!("hbnb-server panicked at {}: {}", location, message);
        error!(%location, "Panic: {}", message);
    }));
}

#[tokio::main]
async fn main() {
    install_panic_hook();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting HBNB server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let settings = Settings::from_env().context("Failed to load configuration")?;
    match settings.type_storage {
        StorageBackend::File => info!("Storage backend: file ({})", settings.file_path),
        StorageBackend::Db => info!(
            "Storage backend: db{}",
            if settings.is_test() { " (test mode, tables reset)" } else { "" }
        ),
    }

    let storage = Storage::open(&settings)
        .await
        .context("Failed to initialize storage")?;

    let state = AppState {
        storage: Arc::new(storage),
    };
    let app = handlers::router(state);

    let addr: SocketAddr = settings
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Serving /states_list on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
