//! User Domain Model
//!
//! A user of the platform. Customers and drivers share one record shape and
//! are told apart by their `Role` tag.

use std::str::FromStr;

use uuid::Uuid;

use super::phone::Phone;
use crate::shared::errors::DomainError;

/// Newtype wrapper for User ID providing type safety
///
/// IDs are generated by persistence; a `User` has none until it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a UserId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for UserId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Role tag distinguishing customers from drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Driver,
}

impl Role {
    /// Wire and storage representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Driver => "DRIVER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Self::Customer),
            "DRIVER" => Ok(Self::Driver),
            other => Err(DomainError::UnsupportedRole(other.to_string())),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    identification: i64,
    name: String,
    role: Role,
    phone: Option<Phone>,
}

impl User {
    /// Create a new, not yet persisted User
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentification` if `identification` is not positive.
    /// Returns `DomainError::EmptyName` if `name` is blank.
    pub fn new(
        identification: i64,
        name: String,
        role: Role,
        phone: Option<Phone>,
    ) -> Result<Self, DomainError> {
        if identification <= 0 {
            return Err(DomainError::InvalidIdentification(identification));
        }
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        Ok(Self {
            id: None,
            identification,
            name,
            role,
            phone,
        })
    }

    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        identification: i64,
        name: String,
        role: Role,
        phone: Option<Phone>,
    ) -> Self {
        Self {
            id: Some(id),
            identification,
            name,
            role,
            phone,
        }
    }

    /// Attach the ID assigned by persistence
    #[must_use]
    pub fn with_id(self, id: UserId) -> Self {
        Self { id: Some(id), ..self }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn identification(&self) -> i64 {
        self.identification
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }
}
