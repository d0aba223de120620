use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Use as the router's fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        message: "The requested resource was not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse {
        message: "The HTTP method is not allowed for this resource".to_string(),
    });

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
