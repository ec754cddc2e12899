//! Auth API Port
//!
//! `AuthApi` is what the form controllers call. `HttpAuthApi` talks to the
//! server's `/api/auth` endpoints over reqwest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's, when it sent one
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx response whose body is missing required fields
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginSuccess {
    pub token: String,
    pub role: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[trait_variant::make(Send)]
pub trait AuthApi {
    /// The success body is ignored
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, path)
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        tracing::debug!(%url, status = response.status().as_u16(), "Response received");
        Ok(response)
    }
}

/// Failure bodies are best effort: one that can't be read, isn't JSON, or
/// has no usable `message` yields `None`
async fn rejection(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_else(|e| {
        tracing::debug!(status, error = %e, "Failed to read error body");
        Vec::new()
    });

    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());

    ApiError::Rejected { status, message }
}

impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self.post("signup", request).await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess, ApiError> {
        let response = self.post("login", request).await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.bytes().await?;
        let success: LoginSuccess =
            serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        if success.token.is_empty() || success.role.is_empty() {
            return Err(ApiError::MalformedBody(
                "`token` and `role` must be non-empty".to_string(),
            ));
        }
        Ok(success)
    }
}
