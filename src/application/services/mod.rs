//! Business logic services.
//!
//! - [`LinkService`] - Link creation, listing, redirect resolution, decode
//! - [`UserService`] - Signup, listing, deletion

pub mod link_service;
pub mod user_service;

pub use link_service::LinkService;
pub use user_service::UserService;
