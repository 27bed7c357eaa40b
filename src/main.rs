use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use zoo::core::db::{create_pool, run_migrations};
use zoo::{AppState, Config, create_router, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.log_info();

    let pool = create_pool(&config).await.map_err(|e| {
        error!("Failed to open database: {e}");
        e
    })?;
    info!("Database connection pool created");

    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let addr = (config.server_host.clone(), config.server_port);
    let state = Arc::new(AppState::new(pool.clone(), config));

    if state.config.seed_data {
        seed::seed_if_empty(&state).await?;
    }

    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}:{}", addr.0, addr.1);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
