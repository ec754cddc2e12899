//! Portal Client
//!
//! Client side of the portal's authentication flow:
//! - `signup` / `login` - form controllers (state + submit lifecycle)
//! - `api` - Auth API port and its HTTP implementation
//! - `storage`, `notify`, `navigate` - ports the controllers drive
//! - `cli` - command definition for the `portal` binary
//!
//! Controllers own no I/O of their own. Everything observable (network,
//! durable storage, notifications, navigation) goes through a port, so a
//! view layer or a test can supply its own.

pub mod api;
pub mod cli;
pub mod config;
pub mod loading;
pub mod login;
pub mod navigate;
pub mod notify;
pub mod role;
pub mod session;
pub mod signup;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use api::{ApiError, AuthApi, HttpAuthApi};
pub use config::ClientConfig;
pub use login::{LoginForm, LoginState};
pub use navigate::{History, Navigator};
pub use notify::{Notice, Notifier, TracingNotifier};
pub use role::{LandingRoutes, Role};
pub use session::Session;
pub use signup::{SignupForm, SignupState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; no request was sent
    Invalid(String),
    /// The request failed or its result could not be applied
    Failed(String),
    Succeeded,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}
