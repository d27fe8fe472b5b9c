//! Data Transfer Objects
//!
//! Wire-level representations exchanged with driving adapters.

pub mod user;

pub use user::UserDto;
