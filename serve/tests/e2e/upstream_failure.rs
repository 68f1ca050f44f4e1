use govschemes::MockGeneration;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_upstream_failure_is_500_and_not_logged() {
    let server = common::spawn_server(MockGeneration::failing("API key not valid")).await;

    let res = reqwest::Client::new()
        .post(server.url("/chat"))
        .json(&json!({ "message": "Tell me about PM Kisan Scheme" }))
        .send()
        .await
        .unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({ "error": "Error generating response: transport error: API key not valid" })
    );
    assert!(body.get("response").is_none());
    assert!(server.records().await.is_empty());
}
