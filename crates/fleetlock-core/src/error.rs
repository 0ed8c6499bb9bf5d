//! Shared error type across fleetlock crates.

use thiserror::Error;

use crate::reply::{Reply, ReplyKind};

/// Shared result type.
pub type Result<T> = std::result::Result<T, FleetLockError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum FleetLockError {
    #[error("required method {0}")]
    MethodNotAllowed(String),
    #[error("missing required header {key}: {value}")]
    MissingHeader { key: String, value: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("lock held by {holder} in group {group}")]
    LockHeld { group: String, holder: String },
    #[error("config: {0}")]
    Config(String),
    #[error("metrics: {0}")]
    Metrics(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FleetLockError {
    /// Map the error to the stable client-facing reply kind.
    ///
    /// Startup-only failures (`Config`, `Metrics`) never reach a client but
    /// still map to `internal_error` so the mapping stays total.
    pub fn reply_kind(&self) -> ReplyKind {
        match self {
            FleetLockError::MethodNotAllowed(_) => ReplyKind::MethodNotAllowed,
            FleetLockError::MissingHeader { .. } => ReplyKind::MissingHeader,
            FleetLockError::Decode(_) => ReplyKind::DecodeError,
            FleetLockError::LockHeld { .. } => ReplyKind::LockHeld,
            FleetLockError::Config(_)
            | FleetLockError::Metrics(_)
            | FleetLockError::Internal(_) => ReplyKind::InternalError,
        }
    }

    /// Build the protocol reply describing this error.
    pub fn to_reply(&self) -> Reply {
        Reply::new(self.reply_kind(), self.to_string())
    }
}
