//! HTTP handlers.
//!
//! - `fleetlock` - pre-reboot / steady-state (run behind the guard pipeline)
//! - `metrics`   - Prometheus text exposition

pub mod fleetlock;
pub mod metrics;
