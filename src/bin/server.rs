//! Task API server entry point.
//!
//! Wires the in-memory adapters behind the service ports, mounts the HTTP
//! surface, and serves until SIGTERM or ctrl-c.

use std::sync::Arc;

use mockable::DefaultClock;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskboard::config::AppConfig;
use taskboard::http::{self, AppState};
use taskboard::identity::{ADMIN_GROUP, Caller, StaticTokenDirectory};
use taskboard::notification::LogNotifier;
use taskboard::task::{adapters::memory::InMemoryTaskStore, services::TaskBoardService};

/// Bearer token accepted by the local development identity directory.
const DEV_ADMIN_TOKEN: &str = "local-dev-admin";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_env("TASKBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load()?;
    info!(
        port = config.port,
        region = %config.region,
        tasks_table = %config.tasks_table,
        user_pool_id = %config.user_pool_id,
        sender_email = %config.sender_email,
        frontend_url = %config.frontend_url,
        "starting task service"
    );

    let store = Arc::new(InMemoryTaskStore::new());
    let notifier = Arc::new(LogNotifier::new(config.sender_email.clone()));
    let clock = Arc::new(DefaultClock);
    let service = TaskBoardService::new(store, notifier, clock);

    warn!("using the static development identity directory; do not expose this build");
    let identity = Arc::new(StaticTokenDirectory::new().with_token(
        DEV_ADMIN_TOKEN,
        Caller::new("admin@example.com", [ADMIN_GROUP]),
    ));

    let state = AppState::new(service, identity, config.frontend_url.clone());
    let app = http::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Resolves when SIGTERM or ctrl-c arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                ctrl_c.await;
                return;
            }
        };
        tokio::select! {
            () = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
