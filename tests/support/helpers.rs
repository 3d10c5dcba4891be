// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use news_aggregator::application::{
    ports::time::Clock,
    services::{ApplicationServices, Repositories},
};
use news_aggregator::domain::article::ArticleReadRepository;
use news_aggregator::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::builders::seeded_store;
use super::mocks::{FixedClock, InMemoryStore};

pub fn repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories {
        article_write: store.clone(),
        article_read: store.clone(),
        comments: store.clone(),
        topics: store.clone(),
        users: store.clone(),
    }
}

pub fn services_over(repos: Repositories) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    Arc::new(ApplicationServices::new(repos, clock))
}

pub fn router_over(store: &Arc<InMemoryStore>) -> Router {
    router_with(repositories(store))
}

pub fn router_with(repos: Repositories) -> Router {
    let state = HttpState {
        services: services_over(repos),
    };
    build_router(state, &["*".to_string()])
}

/// Router over a freshly seeded store; the store is returned for inspection.
pub fn make_test_app() -> (Router, Arc<InMemoryStore>) {
    let store = seeded_store();
    (router_over(&store), store)
}

pub async fn make_test_router() -> Router {
    make_test_app().0
}

/// Router whose article read side always fails.
pub fn make_failing_router(read: Arc<dyn ArticleReadRepository>) -> Router {
    let store = seeded_store();
    let mut repos = repositories(&store);
    repos.article_read = read;
    router_with(repos)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Asserts a `{msg}` error body with the given status and message.
pub fn assert_error(actual: (StatusCode, Value), status: StatusCode, msg: &str) {
    let (actual_status, body) = actual;
    assert_eq!(actual_status, status, "unexpected status, body: {body}");
    assert_eq!(body["msg"], msg, "unexpected body: {body}");
}

pub fn ids(rows: &Value, key: &str) -> Vec<i64> {
    rows.as_array()
        .expect("expected an array")
        .iter()
        .map(|row| row[key].as_i64().expect("numeric id"))
        .collect()
}
