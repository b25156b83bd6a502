use axum::{extract::State, response::IntoResponse, Json};

use crate::services::JobBoard;

// Returns the full static list in its fixed order on every call; no
// filtering parameters are honored.
pub async fn list_jobs(State(board): State<JobBoard>) -> impl IntoResponse {
    Json(board.listings().to_vec())
}
