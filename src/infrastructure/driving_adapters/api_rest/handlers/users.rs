//! User Handlers
//!
//! HTTP handlers for creating and reading users. Handlers only translate
//! between HTTP and the application service.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::application::dto::UserDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, ApplicationError};

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user_by_id))
        .route("/user/:identification", get(get_user_by_identification))
}

/// POST / - Create a new user
///
/// # Responses
///
/// * 201 Created - User created successfully
/// * 400 Bad Request - Validation error or malformed body
/// * 500 Internal Server Error - Database or unexpected error
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserDto>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let Json(dto) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let user = state.user_application_service.execute(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /:id - Get a user by generated ID
///
/// # Responses
///
/// * 200 OK - User found
/// * 404 Not Found - User does not exist
/// * 500 Internal Server Error - Database or unexpected error
#[axum::debug_handler]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_application_service.find_by_id(&id).await?;

    Ok(Json(user))
}

/// GET /user/:identification - Get a user by identification number
///
/// # Responses
///
/// * 200 OK - User found
/// * 404 Not Found - User does not exist, or the identification is not a number
/// * 500 Internal Server Error - Database or unexpected error
#[axum::debug_handler]
async fn get_user_by_identification(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    // A non-numeric identification cannot match any user
    let identification: i64 = identification.parse().map_err(|_| {
        ApplicationError::NotFound(format!("User with identification {identification} not found."))
    })?;

    let user = state
        .user_application_service
        .find_by_identification(identification)
        .await?;

    Ok(Json(user))
}
