//! User signup, listing, and deletion service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for managing user accounts.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a user, hashing the password before it reaches storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn create_user(
        &self,
        email: String,
        name: Option<String>,
        password: &str,
    ) -> Result<User, AppError> {
        let new_user = NewUser {
            email,
            name,
            hashed_password: hash_password(password),
        };

        self.users.create(new_user).await
    }

    /// Lists every user in insertion order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Deletes a user; the schema cascade removes all owned links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `user_id`.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), AppError> {
        if self.users.delete(user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "No user with this id",
                json!({ "user_id": user_id }),
            ))
        }
    }
}
