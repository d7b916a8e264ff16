#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hireboard_api::auth::jwt::{generate_access_token, JwtConfig};
use hireboard_api::config::ServerConfig;
use hireboard_api::router::build_app_router;
use hireboard_api::state::AppState;
use hireboard_core::roles::Role;
use hireboard_core::types::DbId;
use hireboard_db::models::user::{CreateUser, PROVIDER_LOCAL};
use hireboard_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and no Google OAuth.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        google: None,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config(), reqwest::Client::new()))
}

/// Issue a bearer token the test app accepts.
pub fn token_for(user_id: DbId, role: Role) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

/// Insert a user directly and return `(id, bearer token)`.
pub async fn create_user(pool: &PgPool, email: &str, role: Role) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: None,
            role,
            provider: PROVIDER_LOCAL.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    (user.id, token_for(user.id, role))
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request("POST", uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request("POST", uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request("PUT", uri, Some(token), body)).await
}

/// POST a job as `token` and return its id.
pub async fn create_job(app: Router, token: &str, title: &str) -> DbId {
    let body = serde_json::json!({
        "title": title,
        "description": "Build and run services",
        "category": "Engineering",
        "job_type": "FULL_TIME",
        "benefits": ["Remote"],
    });
    let response = post_json_auth(app, "/api/v1/jobs", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// POST an application as `token` and return its id.
pub async fn apply(app: Router, token: &str, job_id: DbId, resume_url: &str) -> DbId {
    let body = serde_json::json!({ "job_id": job_id, "resume_url": resume_url });
    let response = post_json_auth(app, "/api/v1/applications", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
