//! Authentication Service
//!
//! Checks decoded HTTP Basic credentials. The policy sits behind the
//! [`CredentialVerifier`] trait so the gate does not care which one is
//! configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{AuthMode, AuthSettings};
use crate::domain::UserRepository;

/// Credential checking trait for dependency injection
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check a username/password pair, returning the authenticated username.
    async fn verify(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Empty username")]
    EmptyUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unknown user")]
    UnknownUser,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Accepts any non-empty username, whatever the password.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCredentials;

#[async_trait]
impl CredentialVerifier for AnyCredentials {
    async fn verify(&self, username: &str, _password: &str) -> Result<String, AuthError> {
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        Ok(username.to_string())
    }
}

/// Accepts only configured `user:password` pairs.
#[derive(Debug, Clone, Default)]
pub struct AllowListCredentials {
    entries: HashMap<String, String>,
}

impl AllowListCredentials {
    /// Build from `user:password` strings. Entries without a colon are skipped.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|pair| {
                pair.as_ref()
                    .split_once(':')
                    .map(|(user, pass)| (user.to_string(), pass.to_string()))
            })
            .collect();
        Self { entries }
    }
}

#[async_trait]
impl CredentialVerifier for AllowListCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        match self.entries.get(username) {
            Some(expected) if expected == password => Ok(username.to_string()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

/// Accepts usernames present in the user directory. Passwords are not stored,
/// so they are not checked.
pub struct DirectoryCredentials<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DirectoryCredentials<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> CredentialVerifier for DirectoryCredentials<U>
where
    U: UserRepository + 'static,
{
    async fn verify(&self, username: &str, _password: &str) -> Result<String, AuthError> {
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        let known = self
            .user_repo
            .name_exists(username)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !known {
            tracing::debug!(user = %username, "Rejected unknown user");
            return Err(AuthError::UnknownUser);
        }
        Ok(username.to_string())
    }
}

/// Build the verifier selected by `settings.mode`.
pub fn build_verifier<U>(settings: &AuthSettings, user_repo: Arc<U>) -> Arc<dyn CredentialVerifier>
where
    U: UserRepository + 'static,
{
    match settings.mode {
        AuthMode::Any => Arc::new(AnyCredentials),
        AuthMode::AllowList => Arc::new(AllowListCredentials::from_pairs(&settings.credentials)),
        AuthMode::Directory => Arc::new(DirectoryCredentials::new(user_repo)),
    }
}
