use govschemes::MockGeneration;
use serde_json::json;

use super::common;

fn allow_origin(res: &reqwest::Response) -> Option<&str> {
    res.headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn e2e_responses_allow_any_origin() {
    let server = common::spawn_server(MockGeneration::with_reply("Answer.")).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/test")).send().await.unwrap();
    assert_eq!(allow_origin(&res), Some("*"));

    let res = client
        .post(server.url("/chat"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(allow_origin(&res), Some("*"));
}

#[tokio::test]
async fn e2e_preflight_is_no_content() {
    let server = common::spawn_server(MockGeneration::with_reply("unused")).await;

    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, server.url("/chat"))
        .header("origin", "http://example.test")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 204);
    assert_eq!(allow_origin(&res), Some("*"));
    assert!(res
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("POST")));
    assert!(server.generator.prompts().is_empty());
}
