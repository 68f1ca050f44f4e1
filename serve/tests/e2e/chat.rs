use govschemes::MockGeneration;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_chat_returns_cleaned_answer_and_logs_it() {
    let server = common::spawn_server(MockGeneration::with_reply(
        "**Overview:** PM-KISAN supports farmers. **Benefits:** Rs. 6000 per year.",
    ))
    .await;

    let res = reqwest::Client::new()
        .post(server.url("/chat"))
        .json(&json!({ "message": "Tell me about PM Kisan Scheme" }))
        .send()
        .await
        .unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 200);
    let answer = body["response"].as_str().unwrap();
    assert_eq!(
        answer,
        "Overview: PM-KISAN supports farmers.\n\nBenefits: Rs. 6000 per year."
    );

    let records = server.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_input, "Tell me about PM Kisan Scheme");
    assert_eq!(records[0].bot_response, answer);

    let prompts = server.generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("User Query: Tell me about PM Kisan Scheme"));
}

#[tokio::test]
async fn e2e_consecutive_chats_append_in_order() {
    let server = common::spawn_server(MockGeneration::with_reply("Answer.")).await;
    let client = reqwest::Client::new();

    for q in ["PMAY?", "Ayushman Bharat?"] {
        let res = client
            .post(server.url("/chat"))
            .json(&json!({ "message": q }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    let inputs: Vec<String> = server
        .records()
        .await
        .into_iter()
        .map(|r| r.user_input)
        .collect();
    assert_eq!(inputs, vec!["PMAY?", "Ayushman Bharat?"]);
}

#[tokio::test]
async fn e2e_unwritable_log_still_returns_answer() {
    let server = common::spawn_server_logging_to(
        MockGeneration::with_reply("**PMAY** offers housing subsidies."),
        "missing/conversations.json",
    )
    .await;

    let res = reqwest::Client::new()
        .post(server.url("/chat"))
        .json(&json!({ "message": "PMAY?" }))
        .send()
        .await
        .unwrap();
    let (status, body) = common::json_body(res).await;

    assert_eq!(status, 200);
    assert_eq!(body["response"], "PMAY offers housing subsidies.");
    assert_eq!(server.generator.prompts().len(), 1);
}
