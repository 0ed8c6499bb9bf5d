//! FleetLock metrics registry.
//!
//! `Metrics::new` only builds the instruments; nothing is attached to a
//! registry until `Metrics::register` runs. Registration happens once at
//! startup, before the listener accepts traffic, and a name collision is
//! returned as an error instead of being ignored.
//!
//! Request latency is recorded in milliseconds: the elapsed wall-clock
//! seconds are scaled by 1000 and the histogram buckets are declared in the
//! same unit.

use std::time::Duration;

use axum::http::StatusCode;
use prometheus::core::Collector;
use prometheus::{
    exponential_buckets, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGaugeVec, Opts,
    Registry,
};

use fleetlock_core::error::{FleetLockError, Result};

const MILLIS_PER_SEC: f64 = 1000.0;

// 0.5ms, 1ms, 2ms, ... 4096ms
const LATENCY_BUCKET_START_MS: f64 = 0.5;
const LATENCY_BUCKET_FACTOR: f64 = 2.0;
const LATENCY_BUCKET_COUNT: usize = 14;

fn metrics_err(e: prometheus::Error) -> FleetLockError {
    FleetLockError::Metrics(e.to_string())
}

/// All fleetlock instruments, shared by the instrumentation layer and the
/// lock handlers. Clones share the underlying series.
#[derive(Clone)]
pub struct Metrics {
    lock_state: IntGaugeVec,
    lock_transitions: IntGaugeVec,
    lock_requests: IntCounter,
    unlock_requests: IntCounter,
    total_requests: IntCounterVec,
    response_status: IntCounterVec,
    http_duration: HistogramVec,
}

impl Metrics {
    /// Build every instrument. No registration side effects.
    pub fn new() -> Result<Self> {
        let lock_state = IntGaugeVec::new(
            Opts::new(
                "fleetlock_lock_state",
                "State of the fleetlock lease (0 unlocked, 1 locked)",
            ),
            &["group"],
        )
        .map_err(metrics_err)?;

        let lock_transitions = IntGaugeVec::new(
            Opts::new(
                "fleetlock_lock_transition_count",
                "Number of fleetlock lease transitions",
            ),
            &["group"],
        )
        .map_err(metrics_err)?;

        let lock_requests =
            IntCounter::new("fleetlock_lock_request_count", "Number of lock requests")
                .map_err(metrics_err)?;

        let unlock_requests =
            IntCounter::new("fleetlock_unlock_request_count", "Number of unlock requests")
                .map_err(metrics_err)?;

        let total_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Number of requests"),
            &["path"],
        )
        .map_err(metrics_err)?;

        let response_status = IntCounterVec::new(
            Opts::new("http_response_status", "Status of HTTP response"),
            &["path", "status"],
        )
        .map_err(metrics_err)?;

        let buckets = exponential_buckets(
            LATENCY_BUCKET_START_MS,
            LATENCY_BUCKET_FACTOR,
            LATENCY_BUCKET_COUNT,
        )
        .map_err(metrics_err)?;
        let http_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_response_time_millis",
                "Duration of HTTP requests in milliseconds",
            )
            .buckets(buckets),
            &["path"],
        )
        .map_err(metrics_err)?;

        Ok(Self {
            lock_state,
            lock_transitions,
            lock_requests,
            unlock_requests,
            total_requests,
            response_status,
            http_duration,
        })
    }

    /// Register every instrument on `registry` in a fixed order.
    ///
    /// Stops at the first failure; instruments before it stay registered.
    /// Callers treat any error as fatal.
    pub fn register(&self, registry: &Registry) -> Result<()> {
        let collectors: Vec<Box<dyn Collector>> = vec![
            Box::new(self.lock_state.clone()),
            Box::new(self.lock_transitions.clone()),
            Box::new(self.lock_requests.clone()),
            Box::new(self.unlock_requests.clone()),
            Box::new(self.total_requests.clone()),
            Box::new(self.response_status.clone()),
            Box::new(self.http_duration.clone()),
        ];
        register_all(registry, collectors)
    }

    /// Set the lease state gauge for `group`.
    pub fn set_lock_state(&self, group: &str, locked: bool) {
        self.lock_state
            .with_label_values(&[group])
            .set(i64::from(locked));
    }

    pub fn inc_lock_transitions(&self, group: &str) {
        self.lock_transitions.with_label_values(&[group]).inc();
    }

    pub fn inc_lock_requests(&self) {
        self.lock_requests.inc();
    }

    pub fn inc_unlock_requests(&self) {
        self.unlock_requests.inc();
    }

    /// Record one completed request: latency, request total and final status.
    pub fn observe_http(&self, path: &str, status: StatusCode, elapsed: Duration) {
        self.http_duration
            .with_label_values(&[path])
            .observe(elapsed.as_secs_f64() * MILLIS_PER_SEC);
        self.total_requests.with_label_values(&[path]).inc();
        self.response_status
            .with_label_values(&[path, status.as_str()])
            .inc();
    }

    // Read accessors (operator tooling and tests).

    pub fn lock_state(&self, group: &str) -> i64 {
        self.lock_state.with_label_values(&[group]).get()
    }

    pub fn lock_transitions(&self, group: &str) -> i64 {
        self.lock_transitions.with_label_values(&[group]).get()
    }

    pub fn lock_requests(&self) -> u64 {
        self.lock_requests.get()
    }

    pub fn unlock_requests(&self) -> u64 {
        self.unlock_requests.get()
    }

    pub fn requests_total(&self, path: &str) -> u64 {
        self.total_requests.with_label_values(&[path]).get()
    }

    pub fn response_status_count(&self, path: &str, status: StatusCode) -> u64 {
        self.response_status
            .with_label_values(&[path, status.as_str()])
            .get()
    }

    /// Number of latency observations for `path`.
    pub fn response_time_count(&self, path: &str) -> u64 {
        self.http_duration.with_label_values(&[path]).get_sample_count()
    }
}

/// Register each collector on `registry`, returning the first error.
pub fn register_all(
    registry: &Registry,
    collectors: impl IntoIterator<Item = Box<dyn Collector>>,
) -> Result<()> {
    for collector in collectors {
        registry.register(collector).map_err(metrics_err)?;
    }
    Ok(())
}
