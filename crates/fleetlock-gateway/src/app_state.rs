//! Shared application state for the fleetlock gateway.
//!
//! Owns the metrics registry, which is built and fully registered here,
//! before any router exists. Construction returns `Result` so a
//! registration collision stops startup instead of panicking.

use std::sync::Arc;

use prometheus::Registry;

use fleetlock_core::error::Result;

use crate::config::GatewayConfig;
use crate::locks::{LockBackend, MemoryLocks};
use crate::obs::Metrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Registry,
    metrics: Arc<Metrics>,
    locks: Arc<dyn LockBackend>,
}

impl AppState {
    /// Build state with the in-process lock backend.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_backend(cfg, Arc::new(MemoryLocks::new()))
    }

    pub fn with_backend(cfg: GatewayConfig, locks: Arc<dyn LockBackend>) -> Result<Self> {
        let registry = Registry::new();
        let metrics = Metrics::new()?;
        metrics.register(&registry)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics: Arc::new(metrics),
                locks,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn locks(&self) -> Arc<dyn LockBackend> {
        Arc::clone(&self.inner.locks)
    }
}
