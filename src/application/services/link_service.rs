//! Link creation, listing, and redirect resolution service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Link, LinkDraft};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::redirect_url::set_code_param;

/// Maximum code regeneration attempts before giving up on a create.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving tracked links.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a link with a freshly generated short code.
    ///
    /// # Code Generation
    ///
    /// The caller never supplies a code. A random 4-character code is
    /// generated per attempt; a unique-constraint conflict on insert means
    /// the code collided, so the insert is retried with a new code, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReferentialIntegrity`] if the draft's `user_id`
    /// references no existing user (surfaced by the foreign key, not
    /// pre-checked). Returns [`AppError::Internal`] if every attempt
    /// collided or on database errors.
    pub async fn create_link(&self, draft: LinkDraft) -> Result<Link, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();

            match self.links.create(draft.with_code(code)).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, "short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Exhausted short code generation attempts",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Lists every link in insertion order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.links.list().await
    }

    /// Lists links owned by `user_id`; an unknown owner yields an empty list.
    pub async fn links_for_user(&self, user_id: Uuid) -> Result<Vec<Link>, AppError> {
        self.links.list_by_user(user_id).await
    }

    /// Resolves a code to its rewritten destination URL.
    ///
    /// The stored destination has its `code` query parameter set or
    /// overwritten with the resolved link's code. `Ok(None)` means the code
    /// is unknown; the caller decides between a soft miss and a 404.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored destination no longer
    /// parses as a URL, or on database errors.
    pub async fn resolve_redirect(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(link) = self.links.find_by_code(code).await? else {
            return Ok(None);
        };

        let target = set_code_param(&link.redirect_url, &link.code).map_err(|e| {
            tracing::error!(code = %link.code, "stored redirect_url failed to parse: {e}");
            AppError::internal(
                "Stored destination URL is invalid",
                json!({ "code": link.code }),
            )
        })?;

        Ok(Some(target))
    }

    /// Returns the `website_text` of the link matching `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn decode(&self, code: &str) -> Result<Option<String>, AppError> {
        let link = self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("No link with this code", json!({ "code": code }))
        })?;

        Ok(link.website_text)
    }
}
