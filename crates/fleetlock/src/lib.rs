//! Top-level facade crate for fleetlock.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use fleetlock_core::*;
}

pub mod gateway {
    pub use fleetlock_gateway::*;
}
