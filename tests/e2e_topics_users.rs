use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{assert_error, get, make_test_app, send};

const INVALID_TOPIC_BODY: &str = "Bad request! Request body only accepts an object with the properties of slug and description, while slug and description shall not be empty.";

#[tokio::test]
async fn lists_topics() {
    let (app, _) = make_test_app();
    let (status, body) = get(&app, "/api/topics").await;

    assert_eq!(status, StatusCode::OK);
    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    assert!(topics.iter().all(|t| t["slug"].is_string() && t["description"].is_string()));
}

#[tokio::test]
async fn creates_a_topic() {
    let (app, _) = make_test_app();
    let payload = json!({ "slug": "dogs", "description": "Not cats" });
    let (status, body) = send(&app, Method::POST, "/api/topics", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["topic"]["slug"], "dogs");
    assert_eq!(body["topic"]["description"], "Not cats");

    let (_, listing) = get(&app, "/api/topics").await;
    assert_eq!(listing["topics"].as_array().unwrap().len(), 4);

    let (status, _) = get(&app, "/api/articles?topic=dogs").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_topic_conflicts() {
    let (app, _) = make_test_app();
    assert_error(
        send(
            &app,
            Method::POST,
            "/api/topics",
            Some(json!({ "slug": "mitch", "description": "again" })),
        )
        .await,
        StatusCode::CONFLICT,
        "Key (slug)=(mitch) already exists.",
    );
}

#[tokio::test]
async fn topic_body_must_be_complete_and_exact() {
    let (app, _) = make_test_app();
    for payload in [
        json!({ "slug": "dogs" }),
        json!({ "slug": "", "description": "x" }),
        json!({ "slug": "dogs", "description": "x", "img_url": "y" }),
    ] {
        assert_error(
            send(&app, Method::POST, "/api/topics", Some(payload)).await,
            StatusCode::BAD_REQUEST,
            INVALID_TOPIC_BODY,
        );
    }
}

#[tokio::test]
async fn lists_users() {
    let (app, _) = make_test_app();
    let (status, body) = get(&app, "/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 4);
    assert!(users.iter().any(|u| u["username"] == "lurker"));
}

#[tokio::test]
async fn gets_a_user_by_username() {
    let (app, _) = make_test_app();
    let (status, body) = get(&app, "/api/users/butter_bridge").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "butter_bridge");
    assert_eq!(body["user"]["name"], "jonny");
    assert_eq!(
        body["user"]["avatar_url"],
        "https://avatars.example.com/butter_bridge.png"
    );

    assert_error(
        get(&app, "/api/users/not-a-user").await,
        StatusCode::NOT_FOUND,
        "No such username: not-a-user",
    );
}
