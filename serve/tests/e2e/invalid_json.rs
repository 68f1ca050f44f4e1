use govschemes::MockGeneration;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_body_that_is_not_json_is_rejected() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;

    let res = reqwest::Client::new()
        .post(server.url("/chat"))
        .header("content-type", "application/json")
        .body("not valid json")
        .send()
        .await
        .unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(server.generator.prompts().is_empty());
    assert!(server.records().await.is_empty());
}

#[tokio::test]
async fn e2e_missing_or_blank_message_is_rejected() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({ "message": "" }), json!({ "message": "   " })] {
        let res = client
            .post(server.url("/chat"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        let (status, body) = common::json_body(res).await;
        assert_eq!(status, 400, "payload {}", payload);
        assert_eq!(body, json!({ "error": "No message provided" }));
    }

    assert!(server.generator.prompts().is_empty());
    assert!(server.records().await.is_empty());
}

#[tokio::test]
async fn e2e_non_string_message_is_rejected() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;

    let res = reqwest::Client::new()
        .post(server.url("/chat"))
        .json(&json!({ "message": 42 }))
        .send()
        .await
        .unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 400);
    assert!(body["error"].is_string());
    assert!(server.records().await.is_empty());
}
