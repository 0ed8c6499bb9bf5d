//! Observability surface.
//!
//! Metrics are defined and registered in [`metrics`]; `render` turns a
//! registry into the Prometheus text exposition format served on the
//! metrics endpoint.

pub mod metrics;

use prometheus::{Encoder, Registry, TextEncoder};

use fleetlock_core::error::{FleetLockError, Result};

pub use metrics::Metrics;

/// Render every family gathered from `registry` in text exposition format.
pub fn render(registry: &Registry) -> Result<String> {
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buf)
        .map_err(|e| FleetLockError::Metrics(format!("encode failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| FleetLockError::Metrics(format!("non-utf8 exposition: {e}")))
}
