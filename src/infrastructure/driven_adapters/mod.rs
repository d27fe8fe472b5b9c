//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Connection pool bootstrap

pub mod config;
pub mod database;
pub mod user_repository;

pub use config::AppConfig;
pub use user_repository::PostgresUserRepository;
