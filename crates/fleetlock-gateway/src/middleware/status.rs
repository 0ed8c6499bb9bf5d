//! Per-request status capture.
//!
//! A `StatusRecorder` sits between the downstream handler and the client:
//! every response handed through it is forwarded untouched while its status
//! is noted. The recorder starts at `200 OK`, the status a client sees when
//! a handler never sets one. The recorded value is only released by
//! `finish`, which consumes the recorder once the handler has completed.

use axum::http::StatusCode;
use axum::response::Response;

#[derive(Debug)]
pub struct StatusRecorder {
    status: StatusCode,
}

impl Default for StatusRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRecorder {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }

    /// Note an explicitly written status.
    pub fn record(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Pass `response` through unchanged, recording its status.
    pub fn forward(&mut self, response: Response) -> Response {
        self.record(response.status());
        response
    }

    /// Final status, available once the handler is done.
    pub fn finish(self) -> StatusCode {
        self.status
    }
}
