mod common;

use apikit::config::MapEnv;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use common::setup_test_app_with;
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/auth/verify")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_mirrors_origin_with_credentials() {
    let app = setup_test_app_with(MapEnv::new());

    let response = app
        .oneshot(preflight("https://app.example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://app.example.com"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "authorization"
    );
    assert!(headers.contains_key("x-process-time"));
}

#[tokio::test]
async fn test_wildcard_without_credentials() {
    let app = setup_test_app_with(MapEnv::new().with("CORS_ALLOW_CREDENTIALS", "false"));

    let response = app
        .oneshot(preflight("https://app.example.com"))
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}

#[tokio::test]
async fn test_explicit_origin_list() {
    let env = MapEnv::new().with(
        "CORS_ALLOW_ORIGINS",
        "https://app.example.com,https://admin.example.com",
    );
    let app = setup_test_app_with(env);

    let response = app
        .clone()
        .oneshot(preflight("https://admin.example.com"))
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://admin.example.com"
    );

    let response = app
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
