mod common;

use apikit::config::MapEnv;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, setup_test_app, setup_test_app_with};
use tower::ServiceExt;

#[tokio::test]
async fn test_openapi_document_uses_settings() {
    let env = MapEnv::new()
        .with("PROJECT_NAME", "Inventory")
        .with("PROJECT_VERSION", "0.9.1");
    let app = setup_test_app_with(env);

    let request = Request::builder()
        .uri("/api/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "Inventory");
    assert_eq!(body["info"]["version"], "0.9.1");
    assert!(body["paths"]["/api/auth/verify"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}

#[tokio::test]
async fn test_documentation_uis_are_served() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/api/docs/")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/api/redoc")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/api/scalar")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
