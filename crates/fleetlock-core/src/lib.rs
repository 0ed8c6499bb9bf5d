//! fleetlock core: transport-agnostic FleetLock protocol primitives, the reply
//! model and the shared error surface.
//!
//! This crate defines the wire-level contracts shared by the gateway and any
//! lock backend. It carries no transport or runtime dependencies so it can be
//! reused by clients and test tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FleetLockError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod reply;

/// Shared result type.
pub use error::{FleetLockError, Result};
pub use reply::{Reply, ReplyKind};
