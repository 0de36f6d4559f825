mod api;
mod middleware;
mod scheduler;

use std::sync::Arc;

use hoteldm_core::Supplier;
use hoteldm_pipeline::{HotelStore, RefreshCoordinator};
use hoteldm_suppliers::SupplierClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(hoteldm_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(bind_addr = %config.bind_addr, "starting hoteldm-server");

    let client = SupplierClient::from_app_config(&config)?;
    let store = Arc::new(HotelStore::new());
    let coordinator = Arc::new(RefreshCoordinator::new(
        Arc::new(client),
        Arc::clone(&store),
        Supplier::ALL.to_vec(),
    ));

    scheduler::run_refresh(&coordinator).await;
    let _scheduler =
        scheduler::build_scheduler(Arc::clone(&coordinator), config.refresh_interval_secs).await?;

    let app = build_app(AppState { store });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
