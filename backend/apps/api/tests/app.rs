//! End-to-end tests through the fully layered application

use api::build_app;
use auth::{AuthConfig, MemoryUserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_app(MemoryUserRepository::new(), AuthConfig::with_random_secret())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn signup_and_login_under_api_prefix() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/signup",
            json!({
                "username": "foreman",
                "email": "foreman@ppth.example",
                "password": "Neuro#Consult88",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "foreman@ppth.example", "password": "Neuro#Consult88" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["role"], "user");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn routes_outside_prefix_are_not_found() {
    let response = app()
        .oneshot(post_json(
            "/auth/login",
            json!({ "email": "a@b.co", "password": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_is_permissive() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/auth/signup")
        .header(header::ORIGIN, "https://portal.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn error_body_carries_message() {
    let response = app()
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "ghost@ppth.example", "password": "Neuro#Consult88" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
    assert_eq!(body["status"], 401);
}
