//! Phone Value Object

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::errors::DomainError;

lazy_static! {
    /// Optional leading `+`, then 7 to 15 digits
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").expect("valid regex");
}

/// A validated phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a phone string. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` if the value is not a phone number.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if PHONE_REGEX.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::InvalidPhone(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
