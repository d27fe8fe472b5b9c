//! Domain Services
//!
//! Inbound port consumed by the application layer and its implementation.

pub mod user_service;

pub use user_service::{UserDomainService, UserService};
