//! REST API Module
//!
//! Contains HTTP handlers and middleware for the REST API.

pub mod handlers;
pub mod middleware;

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::UserApplicationService;
use crate::shared::errors::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_application_service: Arc<UserApplicationService>,
}

impl AppState {
    #[must_use]
    pub fn new(user_application_service: Arc<UserApplicationService>) -> Self {
        Self {
            user_application_service,
        }
    }
}

/// Turn a panic raised while serving a request into a 500 response
fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("request handler panicked: {detail}")).into_response()
}

/// Build the application router with its middleware stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::users::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
