//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Link, LinkDraft};

/// Request to create a tracked link. The short code is never supplied by the
/// caller; it is generated server-side.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkCreate {
    #[validate(url(message = "Invalid URL format"), length(max = 2083))]
    pub source_url: String,

    #[validate(url(message = "Invalid URL format"), length(max = 2083))]
    pub redirect_url: String,

    #[validate(length(max = 255))]
    pub product: String,

    #[validate(length(max = 255))]
    pub website_text: Option<String>,

    pub user_id: Uuid,
}

impl From<LinkCreate> for LinkDraft {
    fn from(payload: LinkCreate) -> Self {
        LinkDraft {
            source_url: payload.source_url,
            redirect_url: payload.redirect_url,
            product: payload.product,
            website_text: payload.website_text,
            user_id: payload.user_id,
        }
    }
}

/// Public projection of a link.
#[derive(Debug, Serialize)]
pub struct LinkPublic {
    pub id: Uuid,
    pub source_url: String,
    pub redirect_url: String,
    pub product: String,
    pub website_text: Option<String>,
    pub code: String,
    pub user_id: Uuid,
}

impl From<Link> for LinkPublic {
    fn from(link: Link) -> Self {
        LinkPublic {
            id: link.id,
            source_url: link.source_url,
            redirect_url: link.redirect_url,
            product: link.product,
            website_text: link.website_text,
            code: link.code,
            user_id: link.user_id,
        }
    }
}

/// An ordered list of links with its total count.
#[derive(Debug, Serialize)]
pub struct LinksPublic {
    pub data: Vec<LinkPublic>,
    pub count: usize,
}

impl From<Vec<Link>> for LinksPublic {
    fn from(links: Vec<Link>) -> Self {
        let data: Vec<LinkPublic> = links.into_iter().map(LinkPublic::from).collect();
        let count = data.len();
        LinksPublic { data, count }
    }
}

/// Decode response exposing only the link's website text.
#[derive(Debug, Serialize)]
pub struct LinkDecode {
    pub website_text: Option<String>,
}
