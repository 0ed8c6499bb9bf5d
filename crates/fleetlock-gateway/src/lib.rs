//! fleetlock gateway library entry.
//!
//! This crate wires the request guards, the instrumentation layer, the
//! metrics registry and the FleetLock handlers into one axum router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod locks;
pub mod middleware;
pub mod obs;
pub mod reply;
pub mod router;
