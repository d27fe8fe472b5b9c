//! Mappers between DTOs and domain entities.

pub mod user_mapper;

pub use user_mapper::UserMapper;
