//! Handler for short code redirect resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// The destination's query string gets the `code` parameter set or
/// overwritten with the resolved link's code.
///
/// # Endpoint
///
/// `GET /link/{code}`
///
/// # Soft Miss
///
/// An unknown code redirects to the site root instead of returning an
/// error.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.link_service.resolve_redirect(&code).await? {
        Some(target) => Ok(Redirect::temporary(&target)),
        None => {
            debug!(code, "unknown code, redirecting to root");
            Ok(Redirect::temporary("/"))
        }
    }
}
