//! Signup Form Controller
//!
//! Holds the form state, checks that the two passwords agree, and calls the
//! Auth API. On success the form is cleared and the user is sent to login.

use std::sync::Arc;

use tokio::sync::watch;

use crate::SubmitOutcome;
use crate::api::{ApiError, AuthApi, SignupRequest};
use crate::loading::{Loading, LoadingGuard};
use crate::navigate::Navigator;
use crate::notify::Notifier;

pub const LOGIN_ROUTE: &str = "/auth/login";

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match!";
pub const SIGNUP_SUCCESS: &str = "Account created successfully!";
pub const SIGNUP_REJECTED: &str = "Failed to create user";
pub const SIGNUP_TRANSPORT_FAILED: &str = "An error occurred while creating the user.";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_loading: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl SignupState {
    fn clear_fields(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }
}

impl Loading for SignupState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl std::fmt::Debug for SignupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupState")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("is_loading", &self.is_loading)
            .field("show_password", &self.show_password)
            .field("show_confirm_password", &self.show_confirm_password)
            .finish()
    }
}

pub struct SignupForm<A, N, V> {
    api: Arc<A>,
    notifier: Arc<N>,
    navigator: Arc<V>,
    state: watch::Sender<SignupState>,
}

impl<A, N, V> SignupForm<A, N, V>
where
    A: AuthApi,
    N: Notifier,
    V: Navigator,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>, navigator: Arc<V>) -> Self {
        Self {
            api,
            notifier,
            navigator,
            state: watch::Sender::new(SignupState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SignupState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SignupState {
        self.state.borrow().clone()
    }

    pub fn set_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.username = value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.email = value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.password = value);
    }

    pub fn set_confirm_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.confirm_password = value);
    }

    pub fn toggle_password_visibility(&self) {
        self.state.send_modify(|s| s.show_password = !s.show_password);
    }

    pub fn toggle_confirm_password_visibility(&self) {
        self.state
            .send_modify(|s| s.show_confirm_password = !s.show_confirm_password);
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let form = self.snapshot();

        if form.password != form.confirm_password {
            self.notifier.error(PASSWORDS_DO_NOT_MATCH);
            return SubmitOutcome::Invalid(PASSWORDS_DO_NOT_MATCH.to_string());
        }

        let request = SignupRequest {
            username: form.username,
            email: form.email,
            password: form.password,
        };

        let _loading = LoadingGuard::acquire(&self.state);

        match self.api.signup(&request).await {
            Ok(()) => {
                tracing::info!(username = %request.username, "Account created");
                self.notifier.success(SIGNUP_SUCCESS);
                self.state.send_modify(SignupState::clear_fields);
                self.navigator.navigate(LOGIN_ROUTE);
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                let message = failure_message(&e);
                tracing::warn!(error = %e, %message, "Signup failed");
                self.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}

fn failure_message(e: &ApiError) -> String {
    match e {
        ApiError::Rejected { .. } | ApiError::MalformedBody(_) => e
            .server_message()
            .unwrap_or(SIGNUP_REJECTED)
            .to_string(),
        ApiError::Transport(_) => SIGNUP_TRANSPORT_FAILED.to_string(),
    }
}
