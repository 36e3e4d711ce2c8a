mod common;

#[tokio::test]
async fn test_redirect_appends_code_to_existing_query() {
    let server = common::test_server();
    let user_id = common::create_test_user(&server, "owner@example.com").await;
    let code = common::create_test_link(&server, user_id, "https://example.com/page?foo=1").await;

    let response = server.get(&format!("/link/{code}")).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(
        location,
        format!("https://example.com/page?foo=1&code={code}").as_str()
    );
}

#[tokio::test]
async fn test_redirect_adds_query_when_absent() {
    let server = common::test_server();
    let user_id = common::create_test_user(&server, "owner@example.com").await;
    let code = common::create_test_link(&server, user_id, "https://example.com/page").await;

    let response = server.get(&format!("/link/{code}")).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(
        location,
        format!("https://example.com/page?code={code}").as_str()
    );
}

#[tokio::test]
async fn test_redirect_overwrites_existing_code_param() {
    let server = common::test_server();
    let user_id = common::create_test_user(&server, "owner@example.com").await;
    let code = common::create_test_link(&server, user_id, "https://x.com/?code=OLD").await;

    let response = server.get(&format!("/link/{code}")).await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, format!("https://x.com/?code={code}").as_str());

    // No duplicate `code` key
    let location = location.to_str().unwrap().to_string();
    assert_eq!(location.matches("code=").count(), 1);
    assert!(!location.contains("OLD"));
}

#[tokio::test]
async fn test_redirect_unknown_code_soft_misses_to_root() {
    let server = common::test_server();

    let response = server.get("/link/zzzz").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/");
}
