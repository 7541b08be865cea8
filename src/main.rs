use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

use client_service::api::create_router;
use client_service::app::{AppConfig, AppState};
use client_service::infra::{connect_store, init_metrics_handle, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);

    let metrics = if config.enable_metrics {
        let handle = init_metrics_handle();
        if handle.is_none() {
            warn!("Metrics recorder could not be installed, /metrics disabled");
        }
        handle
    } else {
        None
    };

    let store = connect_store(&config.database_url, &config.pool)
        .await
        .context("failed to connect to the client store")?;

    if config.ensure_schema {
        store
            .ensure_schema()
            .await
            .context("failed to create the client table")?;
    }

    let app_state = Arc::new(AppState::new(store).with_metrics(metrics));
    let router = create_router(app_state, &config.server);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "Server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
