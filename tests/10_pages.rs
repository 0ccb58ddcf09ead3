mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(payload["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn home_page_lists_cities() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dubai"));
    assert!(body.contains("Sharjah"));
    Ok(())
}

#[tokio::test]
async fn list_without_city_is_plain_400() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/universities").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "No city selected");

    // Blank city counts as missing
    let (status, _headers, _body) = common::get(&app, "/universities?city=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_city_is_404() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, _body) = common::get(&app, "/universities?city=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_matches_city_case_insensitively() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/universities?city=dubai").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("University of Dubai"));
    // A Sharjah-only entry should not leak into Dubai results
    assert!(!body.contains("American University of Sharjah"));
    Ok(())
}

#[tokio::test]
async fn program_filter_narrows_list() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) =
        common::get(&app, "/universities?city=Dubai&program=Design").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Heriot-Watt University Dubai"));
    assert!(!body.contains("University of Wollongong"));
    Ok(())
}

#[tokio::test]
async fn text_filter_matches_description() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/universities?city=Dubai&q=scottish").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Heriot-Watt University Dubai"));
    assert!(!body.contains("Middlesex"));
    Ok(())
}

#[tokio::test]
async fn detail_page_renders_requirements() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/university/khalifa-university").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Khalifa University"));
    assert!(body.contains("English proficiency"));
    Ok(())
}

#[tokio::test]
async fn unknown_slug_is_404() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/university/no-such-place").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Unknown university");
    Ok(())
}

#[tokio::test]
async fn favorites_page_renders_empty_state_for_anonymous() -> Result<()> {
    let app = common::test_app();
    let (status, _headers, body) = common::get(&app, "/favorites").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("not signed in"));
    Ok(())
}

#[tokio::test]
async fn responses_carry_security_headers() -> Result<()> {
    let app = common::test_app();
    let (_status, headers, _body) = common::get(&app, "/").await;
    assert_eq!(
        headers.get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    Ok(())
}

#[tokio::test]
async fn host_restriction_rejects_unlisted_hosts() -> Result<()> {
    let app = common::test_app_with(|config| {
        config.server.allowed_hosts = vec!["myuni.example".to_string()];
    });

    let request = axum::http::Request::builder()
        .uri("/")
        .header("host", "evil.example")
        .body(axum::body::Body::empty())?;
    let (status, _headers, body) = common::send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid host");

    let request = axum::http::Request::builder()
        .uri("/")
        .header("host", "myuni.example:8000")
        .body(axum::body::Body::empty())?;
    let (status, _headers, _body) = common::send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn rate_limit_kicks_in_past_the_window_max() -> Result<()> {
    let app = common::test_app_with(|config| {
        config.limits.rate_limit_requests = 3;
        config.limits.rate_limit_window_secs = 60;
    });

    for _ in 0..3 {
        let (status, _headers, _body) = common::get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _headers, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let payload: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(payload["code"], "TOO_MANY_REQUESTS");
    Ok(())
}
