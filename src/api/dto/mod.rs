//! Request and response projections.
//!
//! Public projections strip fields that must not leave the service; the
//! user's hashed password never appears in a response type.

pub mod health;
pub mod link;
pub mod user;

pub use health::HealthResponse;
pub use link::{LinkCreate, LinkDecode, LinkPublic, LinksPublic};
pub use user::{UserCreate, UserPublic, UsersPublic};
