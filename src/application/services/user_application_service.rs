//! User Application Service
//!
//! Validates requests, drives the domain service and normalizes every
//! lower-layer failure into `ApplicationError::Database`.

use std::sync::Arc;

use validator::Validate;

use crate::application::dto::UserDto;
use crate::application::mappers::UserMapper;
use crate::domain::models::user::UserId;
use crate::domain::services::UserService;
use crate::shared::errors::{ApplicationError, RepositoryError};

/// Application service for creating and reading users
pub struct UserApplicationService {
    user_service: Arc<dyn UserService>,
}

impl UserApplicationService {
    /// Create a new UserApplicationService
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create a user
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if the DTO is incomplete or invalid.
    /// Returns `ApplicationError::Database` if persisting the user fails.
    pub async fn execute(&self, dto: UserDto) -> Result<UserDto, ApplicationError> {
        dto.validate().map_err(|e| {
            tracing::warn!(errors = %e, "Rejected invalid user");
            ApplicationError::from(e)
        })?;

        let user = UserMapper::to_entity(&dto)?;
        tracing::info!(
            identification = user.identification(),
            role = %user.role(),
            "Creating new user"
        );

        let created = self
            .user_service
            .create(user)
            .await
            .map_err(|e| database_error("Error saving user.", &e))?;

        tracing::info!(
            user_id = ?created.id().map(ToString::to_string),
            identification = created.identification(),
            "User created successfully"
        );

        Ok(UserMapper::to_user_dto(&created))
    }

    /// Find a user by generated ID
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no user has this ID.
    /// Returns `ApplicationError::Database` if the lookup fails.
    pub async fn find_by_id(&self, id: &str) -> Result<UserDto, ApplicationError> {
        tracing::debug!(user_id = %id, "Getting user by ID");

        let not_found = || {
            tracing::warn!(user_id = %id, "User not found");
            ApplicationError::NotFound(format!("User with ID {id} not found."))
        };

        // A malformed ID cannot match any stored user
        let Ok(user_id) = UserId::try_from(id) else {
            return Err(not_found());
        };

        let user = self
            .user_service
            .get_by_id(&user_id)
            .await
            .map_err(|e| database_error("Error retrieving user.", &e))?
            .ok_or_else(not_found)?;

        Ok(UserMapper::to_user_dto(&user))
    }

    /// Find a user by identification number
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no user has this identification.
    /// Returns `ApplicationError::Database` if the lookup fails.
    pub async fn find_by_identification(&self, identification: i64) -> Result<UserDto, ApplicationError> {
        tracing::debug!(identification, "Getting user by identification");

        let user = self
            .user_service
            .get_by_identification(identification)
            .await
            .map_err(|e| database_error("Error retrieving user.", &e))?
            .ok_or_else(|| {
                tracing::warn!(identification, "User not found");
                ApplicationError::NotFound(format!("User with identification {identification} not found."))
            })?;

        Ok(UserMapper::to_user_dto(&user))
    }
}

fn database_error(message: &str, source: &RepositoryError) -> ApplicationError {
    tracing::error!(error = %source, "{message}");
    ApplicationError::Database(message.to_string())
}
