//! Axum request handlers.
//!
//! One module per route group:
//!
//! - [`links`] - Link creation and listing
//! - [`redirect`] - Short code redirect resolution
//! - [`decode`] - Short code decode
//! - [`users`] - User signup, listing, deletion
//! - [`health`] - Liveness probe

pub mod decode;
pub mod health;
pub mod links;
pub mod redirect;
pub mod users;

pub use decode::decode_handler;
pub use health::health_handler;
pub use links::{all_links_handler, create_link_handler, user_links_handler};
pub use redirect::redirect_handler;
pub use users::{create_user_handler, delete_user_handler, list_users_handler};
