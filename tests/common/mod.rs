#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use myuni::{app, config::AppConfig, AppState};

/// In-process app over a throwaway data directory.
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _dir: tempfile::TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with(|_| {})
}

pub fn test_app_with(configure: impl FnOnce(&mut AppConfig)) -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = AppConfig::default();
    config.store.data_dir = dir.path().join("data");
    config.server.static_dir = dir.path().join("static");
    config.images.cache_dir = dir.path().join("static").join("images");
    // Keep the limiter out of the way unless a test opts in
    config.limits.rate_limit_requests = 100_000;
    configure(&mut config);

    let state = AppState::new(config);
    TestApp {
        router: app(state.clone()),
        state,
        _dir: dir,
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("infallible router");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, headers, String::from_utf8_lossy(&bytes).to_string())
}

pub async fn get(app: &TestApp, path: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request");
    send(&app.router, request).await
}

pub async fn get_with_cookie(
    app: &TestApp,
    path: &str,
    cookie: &str,
) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    send(&app.router, request).await
}

pub async fn post_json(
    app: &TestApp,
    path: &str,
    body: &serde_json::Value,
    cookie: Option<&str>,
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request");
    send(&app.router, request).await
}

pub async fn post_form(app: &TestApp, path: &str, body: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(&app.router, request).await
}

/// Pull the session cookie pair ("myuni_session=<token>") out of a
/// Set-Cookie response header.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(|s| s.trim().to_string())
}

/// Sign up a fresh account and return its session cookie pair.
pub async fn signup(app: &TestApp, name: &str, email: &str, password: &str) -> String {
    let (status, headers, _body) = post_form(
        app,
        "/signup",
        &format!("name={}&email={}&password={}", name, email, password),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER, "signup should redirect");
    session_cookie(&headers).expect("signup sets a session cookie")
}
