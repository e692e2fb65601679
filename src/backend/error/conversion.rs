/**
 * Error Conversion
 *
 * Renders a `BackendError` as an HTTP response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid input data",
 *   "status": 400,
 *   "details": [{ "field": "email", "message": "Invalid email format" }]
 * }
 * ```
 *
 * `details` is only present for validation errors.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let mut body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if let Some(details) = self.details() {
            body["details"] = serde_json::json!(details);
        }

        (status, Json(body)).into_response()
    }
}
