//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, spawns background workers, and runs the Axum
//! server lifecycle.

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::domain::cleanup_worker::run_cleanup_worker;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::geoip::{GeoIpLookup, LocalGeoProvider};
use crate::infrastructure::memory::InMemoryRegistry;
use crate::infrastructure::remote_log::{self, RemoteLogger};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory URL registry (empty on every start)
/// - Remote log forwarder (when a sink is configured)
/// - Background click worker
/// - Periodic cleanup sweep
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the bind address is invalid, binding fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(InMemoryRegistry::new());
    tracing::info!("Registry initialized (in-memory)");

    let remote_log = match &config.log_sink_url {
        Some(url) => {
            tracing::info!("Remote log forwarding enabled");
            remote_log::spawn_forwarder(url.clone(), config.log_queue_capacity)
        }
        None => RemoteLogger::disabled(),
    };

    let geoip: Arc<dyn GeoIpLookup> = Arc::new(LocalGeoProvider);

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(
        click_rx,
        registry.clone(),
        geoip,
        remote_log.clone(),
    ));
    tracing::info!("Click worker started");

    tokio::spawn(run_cleanup_worker(
        registry.clone(),
        Duration::from_secs(config.cleanup_interval_seconds),
        remote_log.clone(),
    ));
    tracing::info!(
        "Cleanup worker started (every {} seconds)",
        config.cleanup_interval_seconds
    );

    let link_service = Arc::new(LinkService::new(
        registry.clone(),
        remote_log.clone(),
        config.base_url.clone(),
        config.default_validity_minutes,
    ));
    let stats_service = Arc::new(StatsService::new(registry, remote_log));

    let state = AppState {
        link_service,
        stats_service,
        click_sender: click_tx,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
