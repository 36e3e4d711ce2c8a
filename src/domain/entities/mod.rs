//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - An account that owns tracked links
//! - [`Link`] - A tracked link with a short redirect code
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - [`NewUser`] - For inserting a new user record
//! - [`LinkDraft`] - Caller-supplied link fields, before a code is assigned
//! - [`NewLink`] - A draft plus its generated code, ready for insertion

pub mod link;
pub mod user;

pub use link::{Link, LinkDraft, NewLink};
pub use user::{NewUser, User};
