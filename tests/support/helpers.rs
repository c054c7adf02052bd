// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use vertical_articles::application::ports::{time::Clock, util::IdGenerator};
use vertical_articles::application::services::ApplicationServices;
use vertical_articles::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use vertical_articles::infrastructure::util::RandomIdGenerator;
use vertical_articles::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{FailingArticleStore, FixedClock, InMemoryArticleStore};

pub fn build_services<W, R>(write: Arc<W>, read: Arc<R>) -> Arc<ApplicationServices>
where
    W: ArticleWriteRepository + 'static,
    R: ArticleReadRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = write;
    let read: Arc<dyn ArticleReadRepository> = read;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator);
    Arc::new(ApplicationServices::new(write, read, clock, ids))
}

/// Router over a fresh in-memory store.
pub fn make_test_router() -> axum::Router {
    make_test_router_with_store(Arc::new(InMemoryArticleStore::new()))
}

pub fn make_test_router_with_store(store: Arc<InMemoryArticleStore>) -> axum::Router {
    let services = build_services(Arc::clone(&store), store);
    build_router(HttpState { services })
}

/// Router whose store fails every call.
pub fn make_failing_router() -> axum::Router {
    let store = Arc::new(FailingArticleStore);
    let services = build_services(Arc::clone(&store), store);
    build_router(HttpState { services })
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: Method, uri: &str, raw: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is a `{code, message}` failure with the expected
/// status and code. Returns the message.
pub async fn assert_failure(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    let code = json.get("code").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(code, expected_code, "unexpected failure body: {json}");
    assert!(!message.is_empty(), "expected non-empty message in {json}");
    message.to_string()
}
