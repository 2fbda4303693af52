//! User entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A known rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier
    pub id: String,

    /// Login name, unique
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Check if a login name is known.
    async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
