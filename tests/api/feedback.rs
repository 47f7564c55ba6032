use serde_json::json;
use serde_json::Value;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;
use crate::helpers::spawn_app_without_key;

#[tokio::test]
async fn feedback_ok() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/v3/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&app.provider)
        .await;

    let resp = app
        .post_feedback(&json!({
            "email": "a@b.com",
            "username": "john",
            "feedback": "more charts",
        }))
        .await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "data": { "id": 7 } }));

    assert_eq!(
        app.provider_bodies().await[0],
        json!({
            "updateEnabled": true,
            "listIds": [9],
            "email": "a@b.com",
            "attributes": { "USERNAME": "john", "FEEDBACK": "more charts" },
        })
    );
}

#[tokio::test]
async fn absent_attributes_are_omitted() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .mount(&app.provider)
        .await;

    for (body, attributes) in [
        (
            json!({ "email": "a@b.com", "feedback": "nice" }),
            json!({ "FEEDBACK": "nice" }),
        ),
        (
            json!({ "email": "a@b.com", "username": "", "feedback": "nice" }),
            json!({ "FEEDBACK": "nice" }),
        ),
        (
            json!({ "email": "a@b.com", "username": "john" }),
            json!({ "USERNAME": "john" }),
        ),
    ] {
        let resp = app.post_feedback(&body).await;
        assert_eq!(resp.status().as_u16(), 201, "{body}");
        let sent = app.provider_bodies().await;
        assert_eq!(sent.last().unwrap()["attributes"], attributes, "{body}");
    }

    // no attributes at all
    app.post_feedback(&json!({ "email": "a@b.com" })).await;
    let sent = app.provider_bodies().await;
    assert!(sent.last().unwrap().get("attributes").is_none());
}

#[tokio::test]
async fn feedback_invalid() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.provider)
        .await;

    for (body, msg) in [
        (json!({ "feedback": "nice" }), "null email"),
        (json!({ "email": "nope", "feedback": "nice" }), "invalid email"),
        (
            json!({ "email": "a@b.com", "username": "a".repeat(257) }),
            "username too long",
        ),
    ] {
        let resp = app.post_feedback(&body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");
    }
}

#[tokio::test]
async fn rejection_without_message_uses_fallback() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&app.provider)
        .await;

    let resp = app
        .post_feedback(&json!({ "email": "a@b.com", "feedback": "nice" }))
        .await;
    assert_eq!(resp.status().as_u16(), 429);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to submit feedback" }));
}

#[tokio::test]
async fn missing_api_key() {
    let app = spawn_app_without_key().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.provider)
        .await;

    let resp = app
        .post_feedback(&json!({ "email": "a@b.com", "feedback": "nice" }))
        .await;
    assert_eq!(resp.status().as_u16(), 500);
}
