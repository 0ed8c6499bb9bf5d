use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::obs;
use crate::reply::ApiError;

/// `GET <metrics_path>`: render the registry.
pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = obs::render(state.registry())?;
    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response())
}
