//! Gateway pass-through against a fake backend.

use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::Request,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{any, get},
};
use seating::HttpBackend;
use seating::upload::{self, TIMEOUT_MESSAGE, UPLOAD_TIMEOUT, UploadFile, UploadKind, UploadOutcome};
use seating_gateway::{AppState, build_router};
use serde_json::{Value, json};
use shared::config::Config;
use tokio::net::TcpListener;

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

fn config(backend_url: &str, proxy_timeout: Duration) -> Config {
    Config {
        host: "127.0.0.1".into(),
        http_port: 0,
        backend_url: backend_url.into(),
        allowed_origins: vec!["*".into()],
        proxy_timeout,
    }
}

async fn spawn_gateway(backend_url: &str, proxy_timeout: Duration) -> String {
    let config = config(backend_url, proxy_timeout);
    let state = AppState::new(&config).unwrap();
    spawn(build_router(state, &config)).await
}

/// Echoes what it received so the test can check what was forwarded.
async fn echo(request: Request) -> impl IntoResponse {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let marker = parts
        .headers
        .get("x-portal")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    (
        StatusCode::CREATED,
        [("x-backend", "fake")],
        Json(json!({
            "method": parts.method.as_str(),
            "path": parts.uri.path(),
            "query": parts.uri.query(),
            "body": String::from_utf8_lossy(&body),
            "marker": marker,
        })),
    )
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Student not found"})))
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Bytes::from_static(b"late")
}

fn backend() -> Router {
    Router::new()
        .route("/api/students/{query}", get(missing))
        .route("/api/slow", get(slow))
        .route("/api/upload/{kind}", any(slow))
        .route("/api/{*path}", any(echo))
        .route("/openapi.json", get(|| async { Json(json!({"openapi": "3.1.0"})) }))
}

#[tokio::test]
async fn test_health_is_served_locally() {
    let gateway = spawn_gateway("http://127.0.0.1:9", Duration::from_secs(1)).await;
    let body: Value = reqwest::get(format!("{gateway}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "OK");
}

#[tokio::test]
async fn test_forwards_method_query_body_and_status() {
    let backend_url = spawn(backend()).await;
    let gateway = spawn_gateway(&backend_url, Duration::from_secs(5)).await;

    let response = reqwest::Client::new()
        .post(format!("{gateway}/api/allocation/run?dry=1"))
        .header("x-portal", "admin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"year":2,"session":"AN"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert_eq!(response.headers()["x-backend"], "fake");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/allocation/run");
    assert_eq!(body["query"], "dry=1");
    assert_eq!(body["body"], r#"{"year":2,"session":"AN"}"#);
    assert_eq!(body["marker"], "admin");
}

#[tokio::test]
async fn test_backend_errors_pass_through() {
    let backend_url = spawn(backend()).await;
    let gateway = spawn_gateway(&backend_url, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("{gateway}/api/students/999")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Student not found");
}

#[tokio::test]
async fn test_openapi_is_forwarded() {
    let backend_url = spawn(backend()).await;
    let gateway = spawn_gateway(&backend_url, Duration::from_secs(5)).await;

    let body: Value = reqwest::get(format!("{gateway}/openapi.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["openapi"], "3.1.0");
}

#[tokio::test]
async fn test_unreachable_backend_is_bad_gateway() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let gateway = spawn_gateway(&dead, Duration::from_secs(5)).await;
    let response = reqwest::get(format!("{gateway}/api/halls")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unreachable"));
}

#[tokio::test]
async fn test_slow_backend_is_gateway_timeout() {
    let backend_url = spawn(backend()).await;
    let gateway = spawn_gateway(&backend_url, Duration::from_millis(200)).await;

    let response = reqwest::get(format!("{gateway}/api/slow")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn test_default_proxy_timeout_outlasts_upload_deadline() {
    let config = Config::from_lookup(|_| None);
    assert!(config.proxy_timeout > UPLOAD_TIMEOUT);
}

#[tokio::test]
async fn test_upload_cut_off_by_gateway_shows_timeout_message() {
    let backend_url = spawn(backend()).await;
    let gateway = spawn_gateway(&backend_url, Duration::from_millis(200)).await;
    let client = HttpBackend::new(&gateway)
        .unwrap()
        .with_upload_timeout(Duration::from_secs(3));

    let files = vec![UploadFile::new("timetable.pdf", b"%PDF-1.4".to_vec())];
    let outcome = upload::upload(&client, UploadKind::Timetable, files)
        .await
        .unwrap();
    assert_eq!(outcome, UploadOutcome::TimedOut);
    assert_eq!(outcome.message(), TIMEOUT_MESSAGE);
}
