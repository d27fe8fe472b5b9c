//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its generated ID
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;

    /// Find a user by its generated ID
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by its identification number
    async fn get_by_identification(&self, identification: i64) -> Result<Option<User>, RepositoryError>;
}
