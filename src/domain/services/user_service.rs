//! User Domain Service
//!
//! Inbound port used by the application layer. The domain service adds no
//! rules of its own: it hands every call to the repository gateway and returns
//! the outcome unchanged, absent results included.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Inbound port for user operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Look a user up by generated ID
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Look a user up by identification number
    async fn get_by_identification(&self, identification: i64) -> Result<Option<User>, RepositoryError>;
}

/// Domain service backed by a `UserRepository`
pub struct UserDomainService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserDomainService {
    /// Create a new UserDomainService
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserDomainService {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        self.user_repository.save(&user).await
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.user_repository.get_by_id(id).await
    }

    async fn get_by_identification(&self, identification: i64) -> Result<Option<User>, RepositoryError> {
        self.user_repository.get_by_identification(identification).await
    }
}
