//! Application Layer
//!
//! Validates incoming DTOs, maps them onto domain entities and drives the
//! domain service through its inbound port. Depends on domain abstractions,
//! not concrete implementations.

pub mod dto;
pub mod mappers;
pub mod services;

pub use dto::UserDto;
pub use mappers::UserMapper;
pub use services::UserApplicationService;
