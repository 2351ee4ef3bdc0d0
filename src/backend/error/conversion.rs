/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref source) = self {
            tracing::error!("storage failure: {:?}", source);
        }

        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16()),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
