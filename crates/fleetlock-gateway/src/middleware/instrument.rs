//! Request instrumentation.
//!
//! Wraps the domain handler and, for every request that reaches it, records
//! the latency histogram, the per-path request total and the per-path
//! status counter. The status comes from a `StatusRecorder`, so a handler
//! that never sets one is counted as `200`.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::middleware::status::StatusRecorder;
use crate::obs::Metrics;

#[derive(Clone)]
pub struct InstrumentLayer {
    metrics: Arc<Metrics>,
}

impl InstrumentLayer {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for InstrumentLayer {
    type Service = Instrumented<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Instrumented {
            metrics: Arc::clone(&self.metrics),
            inner,
        }
    }
}

#[derive(Clone)]
pub struct Instrumented<S> {
    metrics: Arc<Metrics>,
    inner: S,
}

impl<S, B> Service<Request<B>> for Instrumented<S>
where
    S: Service<Request<B>, Response = Response, Error = Infallible>,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        // Label by path only; the query string would blow up cardinality.
        let path = req.uri().path().to_owned();
        let start = Instant::now();
        let metrics = Arc::clone(&self.metrics);
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut recorder = StatusRecorder::new();
            let response = match fut.await {
                Ok(response) => recorder.forward(response),
                Err(never) => match never {},
            };

            let status = recorder.finish();
            let elapsed = start.elapsed();
            metrics.observe_http(&path, status, elapsed);
            tracing::trace!(%path, status = status.as_u16(), ?elapsed, "request observed");

            Ok(response)
        })
    }
}
