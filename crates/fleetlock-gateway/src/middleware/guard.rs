//! Request guards.
//!
//! A guard is a stateless predicate over an inbound request. When it fails,
//! the request is answered with a protocol reply and the inner handler is
//! never called; otherwise the request is forwarded untouched.

use std::convert::Infallible;
use std::task::{Context, Poll};

use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::response::Response;
use futures_util::future::{ready, Either, Ready};
use tower::{Layer, Service};

use fleetlock_core::error::{FleetLockError, Result};

use crate::reply::encode_reply;

/// Precondition checked before a request reaches the next stage.
pub trait Guard: Clone + Send + Sync + 'static {
    fn check<B>(&self, req: &Request<B>) -> Result<()>;
}

/// Requires an exact request method.
#[derive(Debug, Clone)]
pub struct MethodGuard {
    method: Method,
}

impl MethodGuard {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Guard for MethodGuard {
    fn check<B>(&self, req: &Request<B>) -> Result<()> {
        if req.method() != self.method {
            return Err(FleetLockError::MethodNotAllowed(self.method.to_string()));
        }
        Ok(())
    }
}

/// Requires a header whose value matches exactly.
#[derive(Debug, Clone)]
pub struct HeaderGuard {
    key: HeaderName,
    value: HeaderValue,
}

impl HeaderGuard {
    pub fn new(key: &str, value: &str) -> Result<Self> {
        let key = HeaderName::try_from(key)
            .map_err(|e| FleetLockError::Config(format!("invalid header name {key:?}: {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| FleetLockError::Config(format!("invalid header value {value:?}: {e}")))?;
        Ok(Self { key, value })
    }
}

impl Guard for HeaderGuard {
    fn check<B>(&self, req: &Request<B>) -> Result<()> {
        if req.headers().get(&self.key) != Some(&self.value) {
            return Err(FleetLockError::MissingHeader {
                key: self.key.to_string(),
                value: String::from_utf8_lossy(self.value.as_bytes()).into_owned(),
            });
        }
        Ok(())
    }
}

/// Layer wrapping a service in guard `G`.
#[derive(Debug, Clone)]
pub struct GuardLayer<G> {
    guard: G,
}

impl<G> GuardLayer<G> {
    pub fn new(guard: G) -> Self {
        Self { guard }
    }
}

pub type MethodGuardLayer = GuardLayer<MethodGuard>;
pub type HeaderGuardLayer = GuardLayer<HeaderGuard>;

impl<G: Clone, S> Layer<S> for GuardLayer<G> {
    type Service = Guarded<G, S>;

    fn layer(&self, inner: S) -> Self::Service {
        Guarded {
            guard: self.guard.clone(),
            inner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Guarded<G, S> {
    guard: G,
    inner: S,
}

impl<G, S, B> Service<Request<B>> for Guarded<G, S>
where
    G: Guard,
    S: Service<Request<B>, Response = Response, Error = Infallible>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Either<Ready<std::result::Result<Response, Infallible>>, S::Future>;

    // A rejected request leaves the inner readiness unused; it stays with this
    // instance for the next call and is released when the instance is dropped.
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        match self.guard.check(&req) {
            Ok(()) => Either::Right(self.inner.call(req)),
            Err(e) => {
                tracing::debug!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    kind = e.reply_kind().as_str(),
                    "request rejected by guard"
                );
                Either::Left(ready(Ok(encode_reply(&e.to_reply()))))
            }
        }
    }
}
