//! User Repository Implementation
//!
//! In-memory implementation of the UserRepository trait. The directory is
//! seeded at startup and read-only afterwards.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

/// In-memory user directory keyed by login name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.name.clone(), u)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(name).cloned())
    }
}
