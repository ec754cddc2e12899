//! Fakes for the controller ports

use std::sync::{Mutex, OnceLock};

use crate::api::{ApiError, AuthApi, LoginRequest, LoginSuccess, SignupRequest};
use crate::navigate::Navigator;
use crate::notify::{Notice, Notifier};
use crate::storage::{SessionStorage, StorageError};

type Probe = Box<dyn Fn() -> bool + Send + Sync>;

/// Canned responses; records every call and what the loading probe saw
/// while the call was in flight
pub(crate) struct FakeAuthApi {
    signup_result: Result<(), ApiError>,
    login_result: Result<LoginSuccess, ApiError>,
    pub signups: Mutex<Vec<SignupRequest>>,
    pub logins: Mutex<Vec<LoginRequest>>,
    probe: OnceLock<Probe>,
    pub loading_during_call: Mutex<Vec<bool>>,
}

impl FakeAuthApi {
    fn with(signup_result: Result<(), ApiError>, login_result: Result<LoginSuccess, ApiError>) -> Self {
        Self {
            signup_result,
            login_result,
            signups: Mutex::default(),
            logins: Mutex::default(),
            probe: OnceLock::new(),
            loading_during_call: Mutex::default(),
        }
    }

    pub fn signup_ok() -> Self {
        Self::with(Ok(()), Err(ApiError::Transport("unused".to_string())))
    }

    pub fn signup_err(err: ApiError) -> Self {
        Self::with(Err(err), Err(ApiError::Transport("unused".to_string())))
    }

    pub fn login_ok(token: &str, role: &str) -> Self {
        Self::with(
            Ok(()),
            Ok(LoginSuccess {
                token: token.to_string(),
                role: role.to_string(),
            }),
        )
    }

    pub fn login_err(err: ApiError) -> Self {
        Self::with(Ok(()), Err(err))
    }

    pub fn observe_loading(&self, probe: impl Fn() -> bool + Send + Sync + 'static) {
        let _ = self.probe.set(Box::new(probe));
    }

    pub fn calls(&self) -> usize {
        self.signups.lock().unwrap().len() + self.logins.lock().unwrap().len()
    }

    fn record_loading(&self) {
        if let Some(probe) = self.probe.get() {
            self.loading_during_call.lock().unwrap().push(probe());
        }
    }
}

impl AuthApi for FakeAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.record_loading();
        self.signups.lock().unwrap().push(request.clone());
        tokio::task::yield_now().await;
        self.signup_result.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess, ApiError> {
        self.record_loading();
        self.logins.lock().unwrap().push(request.clone());
        tokio::task::yield_now().await;
        self.login_result.clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Navigator that records into a plain vec
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Every write fails
#[derive(Default)]
pub(crate) struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(disk_full())
    }

    async fn set_entries(&self, _entries: &[(&str, &str)]) -> Result<(), StorageError> {
        Err(disk_full())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

fn disk_full() -> StorageError {
    StorageError::Io(std::io::Error::other("disk full"))
}
