//! Chat API integration tests
//!
//! Drives the real router over HTTP semantics: JSON bodies in, JSON bodies
//! and status codes out.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::database::TestDatabase;
use common::seed::{ban_user, create_follow, create_user};
use http_body_util::BodyExt;
use orbis::backend::chat::ChatPolicy;
use orbis::backend::server::init::create_app;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(db: &TestDatabase) -> Router {
    create_app(db.pool().clone(), ChatPolicy::default())
}

async fn request(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, value)
}

#[tokio::test]
async fn gated_send_reports_request_pending() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    let app = app(&db);

    let (status, body) = request(
        app.clone(),
        "POST",
        "/api/chat/send",
        Some(json!({
            "sender": "alice",
            "receiver": "bob",
            "body": "hello?",
            "timestamp": 100
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "request_pending");

    let (status, body) = request(app, "GET", "/api/chat/requests/bob", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requests"].as_array().unwrap().len(), 1);
    assert_eq!(body["requests"][0]["sender"], "alice");
    assert_eq!(body["requests"][0]["accepted"], false);
}

#[tokio::test]
async fn direct_send_returns_the_message() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    create_follow(db.pool(), "bob", "alice").await;
    let app = app(&db);

    let (status, body) = request(
        app,
        "POST",
        "/api/chat/send",
        Some(json!({
            "sender": "alice",
            "receiver": "bob",
            "body": "hi bob",
            "timestamp": 100,
            "is_voice": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");
    assert_eq!(body["message"]["body"], "hi bob");
    assert_eq!(body["message"]["is_voice"], true);
    assert_eq!(body["message"]["is_read"], false);
}

#[tokio::test]
async fn banned_sender_gets_forbidden() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    ban_user(db.pool(), "alice").await;
    let app = app(&db);

    let (status, body) = request(
        app,
        "POST",
        "/api/chat/send",
        Some(json!({
            "sender": "alice",
            "receiver": "bob",
            "body": "hi",
            "timestamp": 100
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], 403);
    assert!(body["error"].as_str().unwrap().contains("banned"));
}

#[tokio::test]
async fn conversation_returns_both_directions() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    create_follow(db.pool(), "alice", "bob").await;
    create_follow(db.pool(), "bob", "alice").await;
    let app = app(&db);

    for (sender, receiver, text, timestamp) in
        [("alice", "bob", "hi", 100), ("bob", "alice", "hey", 200)]
    {
        let (status, _) = request(
            app.clone(),
            "POST",
            "/api/chat/send",
            Some(json!({
                "sender": sender,
                "receiver": receiver,
                "body": text,
                "timestamp": timestamp
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = request(
        app,
        "GET",
        "/api/chat/conversation?user_a=alice&user_b=bob",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["body"], "hi");
    assert_eq!(messages[1]["body"], "hey");
}

#[tokio::test]
async fn unread_then_mark_read_roundtrip() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    create_follow(db.pool(), "bob", "alice").await;
    let app = app(&db);

    for timestamp in [100, 200] {
        request(
            app.clone(),
            "POST",
            "/api/chat/send",
            Some(json!({
                "sender": "alice",
                "receiver": "bob",
                "body": "ping",
                "timestamp": timestamp
            })),
        )
        .await;
    }

    let (status, body) = request(
        app.clone(),
        "GET",
        "/api/chat/unread?sender=alice&receiver=bob",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unread"], 2);

    let (status, _) = request(
        app.clone(),
        "POST",
        "/api/chat/read",
        Some(json!({"sender": "alice", "receiver": "bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(
        app,
        "GET",
        "/api/chat/unread?sender=alice&receiver=bob",
        None,
    )
    .await;
    assert_eq!(body["unread"], 0);
}

#[tokio::test]
async fn react_on_unknown_message_is_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = request(
        app,
        "POST",
        "/api/chat/react",
        Some(json!({"message_id": 42, "emoji": "🔥"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn accept_on_unknown_pair_is_not_found() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    let app = app(&db);

    let (status, _) = request(
        app,
        "POST",
        "/api/chat/requests/accept",
        Some(json!({"sender": "alice", "receiver": "bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn accept_then_list_shows_no_pending_requests() {
    let db = TestDatabase::new().await;
    create_user(db.pool(), "alice").await;
    create_user(db.pool(), "bob").await;
    let app = app(&db);

    request(
        app.clone(),
        "POST",
        "/api/chat/send",
        Some(json!({
            "sender": "alice",
            "receiver": "bob",
            "body": "hello?",
            "timestamp": 100
        })),
    )
    .await;

    let (status, body) = request(
        app.clone(),
        "POST",
        "/api/chat/requests/accept",
        Some(json!({"sender": "alice", "receiver": "bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = request(app, "GET", "/api/chat/requests/bob", None).await;
    assert!(body["requests"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_missing_request_succeeds_silently() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, _) = request(
        app,
        "DELETE",
        "/api/chat/requests?sender=alice&receiver=bob",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, _) = request(app, "GET", "/api/posts", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
