use apikit::config::{MapEnv, Settings};
use apikit::router::init_router;
use apikit::state::AppState;
use axum::response::Response;
use http_body_util::BodyExt;

pub const TEST_TOKEN: &str = "test-token";

pub fn test_settings(env: MapEnv) -> Settings {
    Settings::from_source(env.with("TOKEN_AUTHORIZATION", TEST_TOKEN)).unwrap()
}

#[allow(dead_code)]
pub fn setup_test_app() -> axum::Router {
    setup_test_app_with(MapEnv::new())
}

#[allow(dead_code)]
pub fn setup_test_app_with(env: MapEnv) -> axum::Router {
    init_router(AppState::new(test_settings(env)))
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
