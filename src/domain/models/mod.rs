//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod phone;
pub mod user;

pub use phone::Phone;
pub use user::{Role, User, UserId};
