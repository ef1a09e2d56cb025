//! HTTP mapping for `MemstatError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use memstat_core::MemstatError;

/// Handler error; renders as a JSON body with a stable code.
#[derive(Debug)]
pub struct ApiError(pub MemstatError);

impl From<MemstatError> for ApiError {
    fn from(e: MemstatError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(json!({
            "error": self.0.public_message(),
            "code": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
