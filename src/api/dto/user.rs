//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::User;

/// Signup request.
#[derive(Debug, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 8, max = 40))]
    pub password: String,
}

/// Public projection of a user. Excludes the stored password hash.
#[derive(Debug, Serialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        UserPublic {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// An ordered list of users with its total count.
#[derive(Debug, Serialize)]
pub struct UsersPublic {
    pub data: Vec<UserPublic>,
    pub count: usize,
}

impl From<Vec<User>> for UsersPublic {
    fn from(users: Vec<User>) -> Self {
        let data: Vec<UserPublic> = users.into_iter().map(UserPublic::from).collect();
        let count = data.len();
        UsersPublic { data, count }
    }
}
