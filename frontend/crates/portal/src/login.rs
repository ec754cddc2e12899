//! Login Form Controller
//!
//! Exchanges email + password for a session, persists it, and routes the
//! user to the landing page for their role. "Login successfully!" is shown
//! `success_notice_delay` after the response arrives, from a detached task.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::SubmitOutcome;
use crate::api::{ApiError, AuthApi, LoginRequest};
use crate::loading::{Loading, LoadingGuard};
use crate::navigate::Navigator;
use crate::notify::Notifier;
use crate::role::LandingRoutes;
use crate::session::Session;
use crate::storage::SessionStorage;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const LOGIN_SUCCESS: &str = "Login successfully!";
pub const LOGIN_REJECTED: &str = "Failed to login.";
pub const LOGIN_TRANSPORT_FAILED: &str = "An error occurred while logging in, please try again.";
pub const SESSION_NOT_SAVED: &str = "Failed to save session.";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub show_password: bool,
}

impl Loading for LoginState {
    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("is_loading", &self.is_loading)
            .field("show_password", &self.show_password)
            .finish()
    }
}

pub struct LoginForm<A, S, N, V> {
    api: Arc<A>,
    storage: Arc<S>,
    notifier: Arc<N>,
    navigator: Arc<V>,
    routes: LandingRoutes,
    success_notice_delay: Duration,
    state: watch::Sender<LoginState>,
    pending_notices: Mutex<Vec<JoinHandle<()>>>,
}

impl<A, S, N, V> LoginForm<A, S, N, V>
where
    A: AuthApi,
    S: SessionStorage,
    N: Notifier + 'static,
    V: Navigator,
{
    pub fn new(api: Arc<A>, storage: Arc<S>, notifier: Arc<N>, navigator: Arc<V>) -> Self {
        Self {
            api,
            storage,
            notifier,
            navigator,
            routes: LandingRoutes::default(),
            success_notice_delay: Duration::from_secs(2),
            state: watch::Sender::new(LoginState::default()),
            pending_notices: Mutex::default(),
        }
    }

    pub fn with_routes(mut self, routes: LandingRoutes) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_success_notice_delay(mut self, delay: Duration) -> Self {
        self.success_notice_delay = delay;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> LoginState {
        self.state.borrow().clone()
    }

    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.email = value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.password = value);
    }

    pub fn toggle_password_visibility(&self) {
        self.state.send_modify(|s| s.show_password = !s.show_password);
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let form = self.snapshot();

        // Exact check; "  " counts as filled in
        if form.email.is_empty() || form.password.is_empty() {
            self.notifier.error(FILL_ALL_FIELDS);
            return SubmitOutcome::Invalid(FILL_ALL_FIELDS.to_string());
        }

        let request = LoginRequest {
            email: form.email,
            password: form.password,
        };

        let _loading = LoadingGuard::acquire(&self.state);

        let success = match self.api.login(&request).await {
            Ok(success) => success,
            Err(e) => {
                let message = failure_message(&e);
                tracing::warn!(error = %e, %message, "Login failed");
                self.notifier.error(&message);
                return SubmitOutcome::Failed(message);
            }
        };

        let session = Session::new(success.token, success.role);
        if let Err(e) = session.persist(self.storage.as_ref()).await {
            tracing::error!(error = %e, "Failed to persist session");
            self.notifier.error(SESSION_NOT_SAVED);
            return SubmitOutcome::Failed(SESSION_NOT_SAVED.to_string());
        }

        tracing::info!(role = %session.role, "Logged in");
        self.schedule_success_notice();

        self.state.send_modify(|s| {
            s.email.clear();
            s.password.clear();
        });

        if let Some(path) = self.routes.resolve(&session.role) {
            self.navigator.navigate(path);
        }

        SubmitOutcome::Succeeded
    }

    /// Wait for delayed notices still pending
    pub async fn settle(&self) {
        let pending = std::mem::take(
            &mut *self
                .pending_notices
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in pending {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Success notice task failed");
            }
        }
    }

    fn schedule_success_notice(&self) {
        if self.success_notice_delay.is_zero() {
            self.notifier.success(LOGIN_SUCCESS);
            return;
        }

        let notifier = Arc::clone(&self.notifier);
        let delay = self.success_notice_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            notifier.success(LOGIN_SUCCESS);
        });

        let mut pending = self
            .pending_notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}

fn failure_message(e: &ApiError) -> String {
    match e {
        ApiError::Rejected { .. } | ApiError::MalformedBody(_) => e
            .server_message()
            .unwrap_or(LOGIN_REJECTED)
            .to_string(),
        ApiError::Transport(_) => LOGIN_TRANSPORT_FAILED.to_string(),
    }
}
