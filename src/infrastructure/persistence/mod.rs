//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage
//! - [`PgLinkRepository`] - Tracked link storage

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
