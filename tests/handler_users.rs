mod common;

use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn test_create_user_returns_public_projection() {
    let server = common::test_server();

    let response = server
        .post("/users")
        .json(&json!({
            "email": "owner@example.com",
            "name": "Owner",
            "password": "correct-horse"
        }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["email"], "owner@example.com");
    assert_eq!(body["name"], "Owner");
    assert!(body["id"].as_str().is_some());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflict() {
    let server = common::test_server();
    common::create_test_user(&server, "owner@example.com").await;

    let response = server
        .post("/users")
        .json(&json!({
            "email": "owner@example.com",
            "password": "another-pass"
        }))
        .await;

    assert_eq!(response.status_code(), 409);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_user_short_password_rejected() {
    let server = common::test_server();

    let response = server
        .post("/users")
        .json(&json!({
            "email": "owner@example.com",
            "password": "short"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_users() {
    let server = common::test_server();
    common::create_test_user(&server, "first@example.com").await;
    common::create_test_user(&server, "second@example.com").await;

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_delete_user_cascades_to_links() {
    let server = common::test_server();
    let keeper = common::create_test_user(&server, "keeper@example.com").await;
    let leaver = common::create_test_user(&server, "leaver@example.com").await;

    common::create_test_link(&server, keeper, "https://example.com/keep").await;
    common::create_test_link(&server, leaver, "https://example.com/a").await;
    common::create_test_link(&server, leaver, "https://example.com/b").await;

    let response = server.delete(&format!("/users/{leaver}")).await;
    assert_eq!(response.status_code(), 204);

    // Owned links are gone, others untouched
    let body: Value = server.get("/links").await.json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["user_id"], keeper.to_string());

    let body: Value = server.get(&format!("/links/{leaver}")).await.json();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_delete_unknown_user_not_found() {
    let server = common::test_server();

    let response = server.delete(&format!("/users/{}", Uuid::new_v4())).await;

    response.assert_status_not_found();
}
