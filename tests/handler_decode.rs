mod common;

use serde_json::Value;

#[tokio::test]
async fn test_decode_returns_website_text() {
    let server = common::test_server();
    let user_id = common::create_test_user(&server, "owner@example.com").await;
    let code = common::create_test_link_with_text(
        &server,
        user_id,
        "https://example.com",
        Some("Buy now"),
    )
    .await;

    let response = server.get(&format!("/link/{code}/decode")).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["website_text"], "Buy now");
}

#[tokio::test]
async fn test_decode_null_when_link_has_no_text() {
    let server = common::test_server();
    let user_id = common::create_test_user(&server, "owner@example.com").await;
    let code = common::create_test_link(&server, user_id, "https://example.com").await;

    let response = server.get(&format!("/link/{code}/decode")).await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert!(body["website_text"].is_null());
}

// Regression test: an unknown code must yield an explicit 404, not a crash.
#[tokio::test]
async fn test_decode_unknown_code_is_not_found() {
    let server = common::test_server();

    let response = server.get("/link/zzzz/decode").await;

    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}
