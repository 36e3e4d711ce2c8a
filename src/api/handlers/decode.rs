//! Handler for short code decode.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::LinkDecode;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the website text of the link matching a short code.
///
/// # Endpoint
///
/// `GET /link/{code}/decode`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn decode_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkDecode>, AppError> {
    let website_text = state.link_service.decode(&code).await?;

    Ok(Json(LinkDecode { website_text }))
}
