//! Persisted Session
//!
//! `{token, role}` pair issued by a successful login.

use crate::storage::{SessionStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Role stays a raw string so unrecognized values are stored verbatim
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: String,
}

impl Session {
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
        }
    }

    /// Both keys in a single batch
    pub async fn persist<S: SessionStorage>(&self, storage: &S) -> Result<(), StorageError> {
        storage
            .set_entries(&[(TOKEN_KEY, &self.token), (ROLE_KEY, &self.role)])
            .await
    }

    /// `None` unless both keys are present
    pub async fn load<S: SessionStorage>(storage: &S) -> Result<Option<Self>, StorageError> {
        let token = storage.get(TOKEN_KEY).await?;
        let role = storage.get(ROLE_KEY).await?;
        Ok(token.zip(role).map(|(token, role)| Self { token, role }))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}
