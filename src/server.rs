//! HTTP server initialization and runtime setup.
//!
//! Handles dataset loading, registration client setup, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::dataset::SourceCatalog;
use crate::infrastructure::registration::{NullRegistrationLookup, RdapClient, RegistrationLookup};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Reference dataset (fatal if missing or malformed)
/// - Registration lookup client (RDAP or no-op fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Dataset loading fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = Arc::new(SourceCatalog::from_path(&config.dataset_path)?);
    tracing::info!(
        "Loaded {} flagged domains from {}",
        catalog.len(),
        config.dataset_path
    );

    let registration: Arc<dyn RegistrationLookup> = if config.registration_lookups {
        let client = RdapClient::new(
            &config.rdap_base_url,
            Duration::from_secs(config.registration_timeout_seconds),
        )?;
        tracing::info!("Registration lookups enabled ({})", config.rdap_base_url);
        Arc::new(client)
    } else {
        tracing::info!("Registration lookups disabled (NullRegistrationLookup)");
        Arc::new(NullRegistrationLookup::new())
    };

    let state = AppState::new(catalog, registration);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");

    tracing::info!("Shutdown signal received, stopping server");
}
