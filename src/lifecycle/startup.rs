//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Config is loaded and validated by the caller before anything here runs
//! - Listeners start last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::HttpServer;
use crate::i18n::Bundles;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Serve the site until SIGINT or SIGTERM.
pub async fn serve(config: SiteConfig) -> Result<()> {
    let bundles = Arc::new(Bundles::load()?);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        content_dir = %config.content.content_dir.display(),
        tls = config.listener.tls.is_some(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    HttpServer::new(config, bundles).run(listener, shutdown).await
}
