//! API Server
//!
//! Router assembly and configuration for the portal backend. The binary in
//! `main.rs` wires these to Postgres and a TCP listener.

pub mod config;

use auth::{AuthConfig, auth_router, domain::repository::UserRepository};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the HTTP application
///
/// - `/api/auth/signup`, `/api/auth/login`
/// - Request spans via `TraceLayer`
/// - Permissive CORS (any origin, method and header)
pub fn build_app<R>(repo: R, auth_config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", auth_router(repo, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
