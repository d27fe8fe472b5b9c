//! User DTO
//!
//! Every field is optional on the wire so that missing values surface as
//! validation errors instead of deserialization rejections.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::phone::Phone;

/// Rejects names that are empty or only whitespace
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("User name is required.".into());
        return Err(error);
    }
    Ok(())
}

/// Validates a phone number; an empty string counts as no phone
fn validate_phone(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() || Phone::new(value).is_ok() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("phone");
        error.message = Some("User phone must be 7 to 15 digits, optionally prefixed with +.".into());
        Err(error)
    }
}

/// DTO for a user, used both for create requests and responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(
        required(message = "User identification is required."),
        range(min = 1, message = "User identification must be a positive number.")
    )]
    pub identification: Option<i64>,

    #[validate(
        required(message = "User name is required."),
        length(max = 255, message = "User name must be at most 255 characters."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(required(message = "User role is required."))]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

impl UserDto {
    /// Build a request DTO with every field present except the ID
    #[must_use]
    pub fn new(identification: i64, name: &str, role: &str, phone: Option<&str>) -> Self {
        Self {
            id: None,
            identification: Some(identification),
            name: Some(name.to_string()),
            role: Some(role.to_string()),
            phone: phone.map(ToString::to_string),
        }
    }
}
