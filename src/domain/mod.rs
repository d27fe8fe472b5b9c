//! Domain Layer
//!
//! Contains the core business logic, domain models, gateway traits (outbound
//! ports) and the domain service behind the inbound port.
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod services;

pub use gateways::user_repository::UserRepository;
pub use models::phone::Phone;
pub use models::user::{Role, User, UserId};
pub use services::user_service::{UserDomainService, UserService};
