use govschemes::MockGeneration;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_status_is_independent_of_upstream() {
    let server = common::spawn_server(MockGeneration::failing("down")).await;

    let res = reqwest::get(server.url("/test")).await.unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "API is working correctly" })
    );
    assert!(server.generator.prompts().is_empty());
}

#[tokio::test]
async fn e2e_home_page_points_to_chat_endpoint() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;

    let res = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    let body = res.text().await.unwrap();
    assert!(body.contains("Welcome to GovSchemes Chatbot"));
    assert!(body.contains("POST /chat"));
}

#[tokio::test]
async fn e2e_chat_interface_posts_to_chat() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;

    let res = reqwest::get(server.url("/chat-interface")).await.unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("<form"));
    assert!(body.contains("fetch('/chat'"));
}
