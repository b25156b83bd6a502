use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::errors::ApiResult;
use crate::models::Credentials;
use crate::services::UserStore;

pub async fn handle_register(
    State(store): State<UserStore>,
    Json(form): Json<Credentials>,
) -> ApiResult<impl IntoResponse> {
    store.register(&form.username, &form.password)?;
    tracing::info!("registered user: {}", form.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully!" })),
    ))
}

#[axum::debug_handler]
pub async fn handle_login(
    State(store): State<UserStore>,
    Json(form): Json<Credentials>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!("login attempt for user: {}", form.username);
    let username = store.authenticate(&form.username, &form.password)?;

    Ok(Json(json!({
        "message": "Login successful!",
        "user": { "username": username },
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::services::{JobBoard, UserStore};

    fn test_app() -> Router {
        // Lowest bcrypt cost to keep the tests fast
        crate::router(UserStore::new(4), JobBoard::load().unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn register_returns_created() {
        let app = test_app();

        let response = post_json(
            app,
            "/register",
            json!({ "username": "alice", "password": "secret123" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User registered successfully!");
    }

    #[tokio::test]
    async fn duplicate_register_conflicts() {
        let app = test_app();

        let response = post_json(
            app.clone(),
            "/register",
            json!({ "username": "alice", "password": "secret123" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = post_json(
            app,
            "/register",
            json!({ "username": "alice", "password": "other" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Username already taken.");
    }

    #[tokio::test]
    async fn register_then_login_succeeds() {
        let app = test_app();

        post_json(
            app.clone(),
            "/register",
            json!({ "username": "alice", "password": "secret123" }),
        )
        .await;

        let response = post_json(
            app,
            "/login",
            json!({ "username": "alice", "password": "secret123" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful!");
        assert_eq!(body["user"]["username"], "alice");
        // The verifier never leaves the store
        assert!(body["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn bad_credentials_and_unknown_user_look_identical() {
        let app = test_app();

        post_json(
            app.clone(),
            "/register",
            json!({ "username": "alice", "password": "secret123" }),
        )
        .await;

        let wrong_password = post_json(
            app.clone(),
            "/login",
            json!({ "username": "alice", "password": "nope" }),
        )
        .await;
        let unknown_user = post_json(
            app,
            "/login",
            json!({ "username": "bob", "password": "x" }),
        )
        .await;

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(wrong_password).await,
            body_json(unknown_user).await
        );
    }

    #[tokio::test]
    async fn missing_fields_are_bad_requests() {
        let app = test_app();

        let response = post_json(app.clone(), "/register", json!({ "username": "alice" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Username and password are required.");

        let response = post_json(app, "/login", json!({ "password": "secret123" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
