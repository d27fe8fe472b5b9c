//! Application Services

mod user_application_service;

pub use user_application_service::UserApplicationService;
