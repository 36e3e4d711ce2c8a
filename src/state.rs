//! Shared application state injected into all handlers.
//!
//! Each handler receives the state explicitly through axum's `State`
//! extractor; there is no global session or connection singleton.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Builds the state over PostgreSQL-backed repositories.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
        }
    }

    /// Builds the state from pre-constructed services. Used by tests to
    /// substitute alternative repository implementations.
    pub fn with_services(link_service: Arc<LinkService>, user_service: Arc<UserService>) -> Self {
        Self {
            link_service,
            user_service,
        }
    }
}
