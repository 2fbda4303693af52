//! User Service
//!
//! Read-only access to the user directory.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by login name
    async fn get_user_by_name(&self, name: &str) -> Result<User, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn get_user_by_name(&self, name: &str) -> Result<User, UserError> {
        self.user_repo
            .find_by_name(name)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)
    }
}
