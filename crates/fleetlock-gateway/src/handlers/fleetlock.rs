//! FleetLock endpoints.
//!
//! Success replies never set a status, so clients receive the implicit
//! `200 OK` with an empty body. Failures go through the reply encoder.

use axum::extract::State;
use bytes::Bytes;

use fleetlock_core::protocol::decode_client_params;

use crate::app_state::AppState;
use crate::locks::Transition;
use crate::reply::ApiError;

/// `POST /v1/pre-reboot`: acquire the group's reboot lock.
pub async fn pre_reboot(State(state): State<AppState>, body: Bytes) -> Result<(), ApiError> {
    let metrics = state.metrics();
    metrics.inc_lock_requests();

    let params = decode_client_params(body)?;
    let transition = state.locks().lock(&params.group, &params.id).await?;

    if transition == Transition::Changed {
        metrics.set_lock_state(&params.group, true);
        metrics.inc_lock_transitions(&params.group);
        tracing::info!(group = %params.group, id = %params.id, "lock acquired");
    }
    Ok(())
}

/// `POST /v1/steady-state`: release the group's reboot lock.
pub async fn steady_state(State(state): State<AppState>, body: Bytes) -> Result<(), ApiError> {
    let metrics = state.metrics();
    metrics.inc_unlock_requests();

    let params = decode_client_params(body)?;
    let transition = state.locks().unlock(&params.group, &params.id).await?;

    if transition == Transition::Changed {
        metrics.set_lock_state(&params.group, false);
        metrics.inc_lock_transitions(&params.group);
        tracing::info!(group = %params.group, id = %params.id, "lock released");
    }
    Ok(())
}
