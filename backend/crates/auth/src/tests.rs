//! HTTP-level tests for the auth router

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenIssuer;
    use crate::domain::value_object::{email::Email, user_role::UserRole};
    use crate::infra::memory::MemoryUserRepository;
    use crate::presentation::router::auth_router;

    const PASSWORD: &str = "Cardio#Ward2024";

    fn app(repo: &MemoryUserRepository, config: &AuthConfig) -> Router {
        auth_router(repo.clone(), config.clone())
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn signup_body(username: &str, email: &str) -> Value {
        json!({ "username": username, "email": email, "password": PASSWORD })
    }

    #[tokio::test]
    async fn test_signup_then_duplicate_email() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();

        let (status, body) = send(
            app(&repo, &config),
            json_request("/signup", signup_body("DrHouse", "house@ppth.example")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["username"], "DrHouse");
        assert_eq!(body["user"]["email"], "house@ppth.example");
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"]["id"].as_str().is_some());

        let (status, body) = send(
            app(&repo, &config),
            json_request("/signup", signup_body("someone_else", "HOUSE@ppth.example")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Email is already registered");
    }

    #[tokio::test]
    async fn test_login_returns_verifiable_token() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();
        send(
            app(&repo, &config),
            json_request("/signup", signup_body("cuddy", "cuddy@ppth.example")),
        )
        .await;
        repo.set_role(&Email::new("cuddy@ppth.example").unwrap(), UserRole::Admin)
            .await;

        let (status, body) = send(
            app(&repo, &config),
            json_request(
                "/login",
                json!({ "email": "cuddy@ppth.example", "password": PASSWORD }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "admin");

        let token = body["token"].as_str().unwrap();
        let claims = TokenIssuer::new(&config).verify(token).unwrap();
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_login_failures_are_401() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();
        send(
            app(&repo, &config),
            json_request("/signup", signup_body("wilson", "wilson@ppth.example")),
        )
        .await;

        for body in [
            json!({ "email": "wilson@ppth.example", "password": "Wrong#Pass123" }),
            json!({ "email": "nobody@ppth.example", "password": PASSWORD }),
        ] {
            let (status, body) = send(app(&repo, &config), json_request("/login", body)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["message"], "Invalid credentials");
            assert!(body.get("token").is_none());
        }
    }

    #[tokio::test]
    async fn test_form_encoded_bodies() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();

        let (status, _) = send(
            app(&repo, &config),
            form_request(
                "/signup",
                "username=chase&email=chase%40ppth.example&password=Cardio%23Ward2024",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            app(&repo, &config),
            form_request(
                "/login",
                "email=chase%40ppth.example&password=Cardio%23Ward2024",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "user");
    }

    #[tokio::test]
    async fn test_invalid_input_is_400() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();

        let cases = [
            (signup_body("cameron", "not-an-email"), "Invalid email format"),
            (signup_body("x", "cameron@ppth.example"), "Username is too short"),
            (
                json!({ "username": "cameron", "email": "cameron@ppth.example", "password": "qwerty123" }),
                "Password is too common",
            ),
            (
                json!({ "username": "cameron", "email": "cameron@ppth.example" }),
                "password",
            ),
        ];

        for (body, expected) in cases {
            let (status, body) = send(app(&repo, &config), json_request("/signup", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let message = body["message"].as_str().unwrap();
            assert!(message.contains(expected), "{message}");
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_unsupported_media_type() {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::with_random_secret();

        let req = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("email=x"))
            .unwrap();
        let (status, _) = send(app(&repo, &config), req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
