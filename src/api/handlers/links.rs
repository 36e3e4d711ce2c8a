//! Handlers for link creation and listing.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{LinkCreate, LinkPublic, LinksPublic};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a tracked link with a generated short code.
///
/// # Endpoint
///
/// `POST /create_link`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 422 Unprocessable Entity
/// if `user_id` references no existing user.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkCreate>,
) -> Result<Json<LinkPublic>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(payload.into()).await?;

    Ok(Json(link.into()))
}

/// Lists every tracked link.
///
/// # Endpoint
///
/// `GET /links`
pub async fn all_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinksPublic>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into()))
}

/// Lists links owned by a user.
///
/// An owner with no links, or an unknown owner, yields an empty list with
/// count 0; this is not an error condition.
///
/// # Endpoint
///
/// `GET /links/{user_id}`
pub async fn user_links_handler(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<LinksPublic>, AppError> {
    let links = state.link_service.links_for_user(user_id).await?;

    Ok(Json(links.into()))
}
