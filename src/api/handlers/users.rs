//! Handlers for user signup, listing, and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{UserCreate, UserPublic, UsersPublic};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 409 Conflict if the
/// email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<Json<UserPublic>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.email, payload.name, &payload.password)
        .await?;

    Ok(Json(user.into()))
}

/// Lists every user.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<UsersPublic>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into()))
}

/// Deletes a user and, through the schema cascade, every link they own.
///
/// # Endpoint
///
/// `DELETE /users/{user_id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches `user_id`.
pub async fn delete_user_handler(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
