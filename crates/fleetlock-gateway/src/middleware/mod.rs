//! Request pipeline layers.
//!
//! Each layer is a `Handler -> Handler` transform (`tower::Layer`). The
//! FleetLock routes compose them with `tower::ServiceBuilder` in this order,
//! outermost first:
//!
//! 1. `MethodGuardLayer`   - rejects any method but the required one
//! 2. `HeaderGuardLayer`   - rejects requests without the protocol header
//! 3. `InstrumentLayer`    - records latency and final status
//! 4. the domain handler
//!
//! Guard rejections therefore never reach the instrumentation layer.

pub mod guard;
pub mod instrument;
pub mod status;

pub use guard::{
    Guard, GuardLayer, Guarded, HeaderGuard, HeaderGuardLayer, MethodGuard, MethodGuardLayer,
};
pub use instrument::{InstrumentLayer, Instrumented};
pub use status::StatusRecorder;
