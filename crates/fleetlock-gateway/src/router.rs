//! Axum router wiring.
//!
//! Both FleetLock endpoints run behind the same pipeline:
//! method guard -> header guard -> instrumentation -> handler.
//! The metrics endpoint is served plainly.

use axum::handler::Handler;
use axum::http::Method;
use axum::{routing::get, Router};
use tower::ServiceBuilder;

use fleetlock_core::error::Result;
use fleetlock_core::protocol::{
    PRE_REBOOT_PATH, PROTOCOL_HEADER_KEY, PROTOCOL_HEADER_VALUE, STEADY_STATE_PATH,
};

use crate::app_state::AppState;
use crate::handlers;
use crate::middleware::{GuardLayer, HeaderGuard, InstrumentLayer, MethodGuard};

pub fn build_router(state: AppState) -> Result<Router> {
    let pipeline = ServiceBuilder::new()
        .layer(GuardLayer::new(MethodGuard::new(Method::POST)))
        .layer(GuardLayer::new(HeaderGuard::new(
            PROTOCOL_HEADER_KEY,
            PROTOCOL_HEADER_VALUE,
        )?))
        .layer(InstrumentLayer::new(state.metrics()));

    let pre_reboot = pipeline
        .clone()
        .service(handlers::fleetlock::pre_reboot.with_state(state.clone()));
    let steady_state =
        pipeline.service(handlers::fleetlock::steady_state.with_state(state.clone()));

    let metrics_path = state.cfg().server.metrics_path.clone();

    Ok(Router::new()
        .route_service(PRE_REBOOT_PATH, pre_reboot)
        .route_service(STEADY_STATE_PATH, steady_state)
        .route(&metrics_path, get(handlers::metrics::metrics))
        .with_state(state))
}
