//! Integration tests for the scaffold's HTTP surface.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn root_reports_api_info() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "E-Commerce Search API");
    assert!(body["features"].is_array());
}

#[tokio::test]
async fn health_is_alive_and_unthrottled() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "OK");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_endpoint_confirms_routing() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/api/v1/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["version"], "v1");
}

#[tokio::test]
async fn stub_groups_answer_with_their_phase() {
    let app = helpers::test_app();
    let cases = [
        ("/api/v1/products", "Phase 3"),
        ("/api/v1/search?q=tv", "Phase 4-5"),
        ("/api/v1/analytics", "Phase 7"),
        ("/api/v1/benchmark", "Phase 6"),
        ("/api/v1/admin", "Phase 7"),
    ];

    for (path, phase) in cases {
        let (status, body) = helpers::request(&app, "GET", path).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "path {path}");
        assert_eq!(body["success"], false);
        assert!(
            body["message"].as_str().unwrap().contains(phase),
            "path {path} message {}",
            body["message"]
        );
    }
}

#[tokio::test]
async fn product_by_valid_id_is_still_a_stub() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(
        &app,
        "GET",
        "/api/v1/products/7b3e60cb-5f3a-4f84-9c38-0d4c2b1a9e11",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_product_id_is_a_cast_failure() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/api/v1/products/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid id: abc");
}

#[tokio::test]
async fn search_without_query_fails_validation() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/api/v1/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
}

#[tokio::test]
async fn unknown_route_yields_404_envelope() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route GET /nope not found");
}

#[tokio::test]
async fn development_mode_exposes_diagnostics() {
    let app = helpers::test_app();
    let (_, body) = helpers::request(&app, "GET", "/api/v1/products/abc").await;

    assert_eq!(body["error"]["name"], "CAST");
    assert!(body["error"]["stack"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn production_mode_hides_diagnostics() {
    let app = helpers::test_app_with(helpers::test_config("production"));
    let (status, body) = helpers::request(&app, "GET", "/api/v1/products/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_none());
    assert_eq!(body["message"], "Invalid id: abc");
}

#[tokio::test]
async fn admin_health_degrades_without_collaborators() {
    let app = helpers::test_app();
    let (status, body) = helpers::request(&app, "GET", "/api/v1/admin/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("degraded"));
}

#[tokio::test]
async fn rate_limiter_rejects_once_exhausted() {
    let mut config = helpers::test_config("development");
    config.rate_limit.max_requests = 2;
    config.rate_limit.window_seconds = 3600;
    let app = helpers::test_app_with(config);

    for _ in 0..2 {
        let (status, _) = helpers::request(&app, "GET", "/api/v1/test").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = helpers::request(&app, "GET", "/api/v1/test").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Too many requests"));

    // Health stays outside the limiter.
    let (status, _) = helpers::request(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rotating_forwarded_headers_cannot_bypass_rate_limit() {
    let mut config = helpers::test_config("development");
    config.rate_limit.max_requests = 1;
    config.rate_limit.window_seconds = 3600;
    let app = helpers::test_app_with(config);

    let (status, _) = helpers::request_with_headers(
        &app,
        "GET",
        "/api/v1/test",
        &[("x-forwarded-for", "203.0.113.1")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Without a trusted proxy the header is ignored, so every spoofed
    // identity still lands in the same bucket.
    for n in 2..=5 {
        let spoofed = format!("203.0.113.{n}");
        let (status, body) = helpers::request_with_headers(
            &app,
            "GET",
            "/api/v1/test",
            &[("x-forwarded-for", spoofed.as_str())],
        )
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS, "spoofed {spoofed}");
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = helpers::test_app();

    let response = helpers::send(&app, "GET", "/", &[]).await;
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "SAMEORIGIN");
    assert_eq!(response.headers()["referrer-policy"], "no-referrer");

    // Error envelopes get them too.
    let response = helpers::send(&app, "GET", "/nope", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}
