//! FleetLock wire protocol (HTTP + JSON).
//!
//! Clients POST to `/v1/pre-reboot` before rebooting and to
//! `/v1/steady-state` once healthy again. Every request carries the
//! `fleet-lock-protocol: true` header and a body of the form
//! `{"client_params": {"id": "<node>", "group": "<group>"}}`.

use bytes::Bytes;
use serde::Deserialize;

use crate::error::{FleetLockError, Result};

/// Header every FleetLock request must carry.
pub const PROTOCOL_HEADER_KEY: &str = "fleet-lock-protocol";
/// Required value of [`PROTOCOL_HEADER_KEY`].
pub const PROTOCOL_HEADER_VALUE: &str = "true";

/// Lock (reboot slot) acquisition endpoint.
pub const PRE_REBOOT_PATH: &str = "/v1/pre-reboot";
/// Lock release endpoint.
pub const STEADY_STATE_PATH: &str = "/v1/steady-state";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestBody {
    client_params: ClientParams,
}

/// Identity of the client asking for (or releasing) a lock.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientParams {
    /// Node identifier (e.g. machine-id).
    pub id: String,
    /// Reboot group the node belongs to.
    pub group: String,
}

/// Decode a FleetLock request body.
pub fn decode_client_params(body: Bytes) -> Result<ClientParams> {
    let req: RequestBody = serde_json::from_slice(&body)
        .map_err(|e| FleetLockError::Decode(format!("invalid request body: {e}")))?;

    let params = req.client_params;
    if params.id.is_empty() {
        return Err(FleetLockError::Decode("client_params.id must not be empty".into()));
    }
    if params.group.is_empty() {
        return Err(FleetLockError::Decode("client_params.group must not be empty".into()));
    }
    Ok(params)
}
