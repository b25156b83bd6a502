use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::ApiError;

// The IntoResponse trait implementation converts ApiError into a well-formed HTTP response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            // Missing fields are bad requests
            ApiError::MissingCredentials => StatusCode::BAD_REQUEST,

            // Duplicate usernames are conflicts
            ApiError::UsernameTaken => StatusCode::CONFLICT,

            // Unknown user and wrong password both map here
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // Hashing failures are internal server errors; log the detail
            // server-side and keep it out of the response body
            ApiError::Hash(ref e) => {
                tracing::error!("password hashing failed: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server error." })),
                )
                    .into_response();
            }
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
