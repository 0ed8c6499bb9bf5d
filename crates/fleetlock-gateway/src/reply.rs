//! Reply encoding onto HTTP responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use fleetlock_core::{FleetLockError, Reply};

/// Encode a protocol reply: status derived from the kind, JSON body.
pub fn encode_reply(reply: &Reply) -> Response {
    let status =
        StatusCode::from_u16(reply.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.to_json(),
    )
        .into_response()
}

/// Handler-facing error: lets handlers use `?` on `FleetLockError`.
#[derive(Debug)]
pub struct ApiError(pub FleetLockError);

impl From<FleetLockError> for ApiError {
    fn from(e: FleetLockError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self.0.reply_kind(), fleetlock_core::ReplyKind::InternalError) {
            tracing::error!(error = %self.0, "request failed");
        }
        encode_reply(&self.0.to_reply())
    }
}
