//! FleetLock reply model.
//!
//! Failures are answered with a JSON body `{"kind": "...", "value": "..."}`
//! where `kind` is a stable machine-readable tag and `value` a human-readable
//! message. The HTTP status is derived from the kind.

use serde::Serialize;

/// Reply kinds (stable API, serialized as snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// Request used a method other than the required one.
    MethodNotAllowed,
    /// Required protocol header absent or wrong.
    MissingHeader,
    /// Request body could not be decoded.
    DecodeError,
    /// Lock is held by another client.
    LockHeld,
    /// Internal server error.
    InternalError,
}

impl ReplyKind {
    /// String representation used in JSON replies.
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyKind::MethodNotAllowed => "method_not_allowed",
            ReplyKind::MissingHeader => "missing_header",
            ReplyKind::DecodeError => "decode_error",
            ReplyKind::LockHeld => "lock_held",
            ReplyKind::InternalError => "internal_error",
        }
    }

    /// HTTP status code sent with a reply of this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ReplyKind::MethodNotAllowed => 405,
            ReplyKind::MissingHeader | ReplyKind::DecodeError => 400,
            ReplyKind::LockHeld => 409,
            ReplyKind::InternalError => 500,
        }
    }
}

/// A protocol reply carrying a kind and a formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub value: String,
}

impl Reply {
    pub fn new(kind: ReplyKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Serialize to the JSON wire body.
    pub fn to_json(&self) -> String {
        // Both fields are plain strings; serialization cannot fail, but keep
        // the fallback total instead of unwrapping.
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "reply serialization failed");
            format!(r#"{{"kind":"{}","value":""}}"#, self.kind.as_str())
        })
    }
}
