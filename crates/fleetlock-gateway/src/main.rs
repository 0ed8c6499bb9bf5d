//! fleetlock gateway binary.
//!
//! - Loads config (`FLEETLOCK_CONFIG`, default `fleetlock.yaml`)
//! - Builds and registers metrics before binding
//! - Serves `/v1/pre-reboot`, `/v1/steady-state` and the metrics endpoint

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use fleetlock_core::error::{FleetLockError, Result};
use fleetlock_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fleetlock-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    // Registration collisions surface here, before anything is served.
    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state)?;

    tracing::info!(%listen, "fleetlock-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FleetLockError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| FleetLockError::Internal(format!("server failed: {e}")))
}
