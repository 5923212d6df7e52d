use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::error::TodoError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub message: String }

#[derive(Debug)]
pub struct ApiError { pub status: StatusCode, pub message: String }

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        let status = match e.downcast_ref::<TodoError>() {
            Some(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
            Some(_) => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() { tracing::error!(error = %e, "request failed"); }
        Self { status, message: e.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(ErrorBody { message: self.message })).into_response()
    }
}
