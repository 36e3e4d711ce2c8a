#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

use link_tracker::application::services::{LinkService, UserService};
use link_tracker::domain::entities::{Link, NewLink, NewUser, User};
use link_tracker::domain::repositories::{LinkRepository, UserRepository};
use link_tracker::error::AppError;
use link_tracker::routes::router;
use link_tracker::state::AppState;

/// In-memory stand-in for the PostgreSQL schema. Enforces the same
/// constraints the migrations declare: unique email, unique code, the
/// links→users foreign key, and cascade delete.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    links: Mutex<Vec<Link>>,
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            name: new_user.name,
            hashed_password: new_user.hashed_password,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);

        let removed = users.len() < before;
        if removed {
            // ON DELETE CASCADE
            self.links.lock().unwrap().retain(|l| l.user_id != user_id);
        }

        Ok(removed)
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        if !self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_link.user_id)
        {
            return Err(AppError::referential_integrity(
                "Referenced record does not exist",
                json!({ "constraint": "links_user_id_fkey" }),
            ));
        }

        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        let link = Link {
            id: Uuid::new_v4(),
            code: new_link.code,
            source_url: new_link.source_url,
            redirect_url: new_link.redirect_url,
            product: new_link.product,
            website_text: new_link.website_text,
            user_id: new_link.user_id,
            created_at: Utc::now(),
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.lock().unwrap().clone())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }
}

pub fn create_test_state() -> AppState {
    let store = Arc::new(InMemoryStore::default());

    let link_service = Arc::new(LinkService::new(store.clone() as Arc<dyn LinkRepository>));
    let user_service = Arc::new(UserService::new(store as Arc<dyn UserRepository>));

    AppState::with_services(link_service, user_service)
}

pub fn test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Registers a user through the API and returns its id.
pub async fn create_test_user(server: &TestServer, email: &str) -> Uuid {
    let response = server
        .post("/users")
        .json(&json!({
            "email": email,
            "name": "Test Owner",
            "password": "correct-horse"
        }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Creates a link through the API and returns its generated code.
pub async fn create_test_link(server: &TestServer, user_id: Uuid, redirect_url: &str) -> String {
    create_test_link_with_text(server, user_id, redirect_url, None).await
}

pub async fn create_test_link_with_text(
    server: &TestServer,
    user_id: Uuid,
    redirect_url: &str,
    website_text: Option<&str>,
) -> String {
    let response = server
        .post("/create_link")
        .json(&json!({
            "source_url": "https://shop.example.com/landing",
            "redirect_url": redirect_url,
            "product": "widget",
            "website_text": website_text,
            "user_id": user_id
        }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    body["code"].as_str().unwrap().to_string()
}
