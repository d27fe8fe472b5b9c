//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers
//! - Request middleware

pub mod api_rest;
