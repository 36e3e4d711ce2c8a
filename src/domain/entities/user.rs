//! User entity representing a link owner.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An account that owns tracked links.
///
/// `hashed_password` is stored for the signup/login boundary and must never
/// leave the service through a public projection.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub hashed_password: String,
}
