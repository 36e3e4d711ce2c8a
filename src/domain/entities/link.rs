//! Link entity representing a tracked redirect.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A tracked link mapping a short code to a destination URL.
///
/// `source_url` is the page the link is placed on, `redirect_url` the
/// destination the short code resolves to. The `code` is appended to the
/// destination's query string on every redirect.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub code: String,
    pub source_url: String,
    pub redirect_url: String,
    pub product: String,
    pub website_text: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a link, before a code has been assigned.
#[derive(Debug, Clone)]
pub struct LinkDraft {
    pub source_url: String,
    pub redirect_url: String,
    pub product: String,
    pub website_text: Option<String>,
    pub user_id: Uuid,
}

impl LinkDraft {
    /// Attaches a generated code, producing an insertable record.
    pub fn with_code(&self, code: String) -> NewLink {
        NewLink {
            code,
            source_url: self.source_url.clone(),
            redirect_url: self.redirect_url.clone(),
            product: self.product.clone(),
            website_text: self.website_text.clone(),
            user_id: self.user_id,
        }
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub source_url: String,
    pub redirect_url: String,
    pub product: String,
    pub website_text: Option<String>,
    pub user_id: Uuid,
}
