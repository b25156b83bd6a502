mod config;
mod errors;
mod handlers;
mod models;
mod services;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::Config,
    services::{JobBoard, UserStore},
};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // In-memory state, alive for the lifetime of the process
    let user_store = UserStore::new(config.auth.bcrypt_cost);
    let job_board = JobBoard::load().expect("Failed to load job listings");

    let app = router(user_store, job_board);

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", config.server.host, config.server.port),
    )
    .await
    .expect("Failed to bind server");

    tracing::info!(
        "backend listening on {}:{}",
        config.server.host,
        config.server.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}

impl FromRef<(UserStore, JobBoard)> for UserStore {
    fn from_ref(state: &(UserStore, JobBoard)) -> Self {
        state.0.clone()
    }
}

impl FromRef<(UserStore, JobBoard)> for JobBoard {
    fn from_ref(state: &(UserStore, JobBoard)) -> Self {
        state.1.clone()
    }
}

fn router(user_store: UserStore, job_board: JobBoard) -> Router {
    Router::<(UserStore, JobBoard)>::new()
        // Auth routes
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        // Job board routes
        .route("/jobs", get(handlers::list_jobs))
        // The frontend is served separately, so allow cross-origin requests
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Add state
        .with_state((user_store, job_board))
}
