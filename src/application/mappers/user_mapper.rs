//! User Mapper
//!
//! Translates between `UserDto` and the `User` entity.

use crate::application::dto::UserDto;
use crate::domain::models::phone::Phone;
use crate::domain::models::user::{Role, User};
use crate::shared::errors::DomainError;

pub struct UserMapper;

impl UserMapper {
    /// Build a domain `User` from a DTO. The DTO `id` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedRole` if the role is not `CUSTOMER` or `DRIVER`,
    /// `DomainError::MissingField` if a required field is absent, and any error raised
    /// while building the `Phone` or the `User`.
    pub fn to_entity(dto: &UserDto) -> Result<User, DomainError> {
        let role: Role = dto
            .role
            .as_deref()
            .ok_or(DomainError::MissingField("role"))?
            .parse()?;
        let identification = dto
            .identification
            .ok_or(DomainError::MissingField("identification"))?;
        let name = dto.name.clone().ok_or(DomainError::MissingField("name"))?;

        let phone = dto
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(Phone::new)
            .transpose()?;

        User::new(identification, name, role, phone)
    }

    /// Build a DTO from a domain `User`
    #[must_use]
    pub fn to_user_dto(user: &User) -> UserDto {
        UserDto {
            id: user.id().map(ToString::to_string),
            identification: Some(user.identification()),
            name: Some(user.name().to_string()),
            role: Some(user.role().to_string()),
            phone: user.phone().map(|p| p.as_str().to_string()),
        }
    }
}
