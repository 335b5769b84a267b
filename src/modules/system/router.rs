use axum::{Router, routing::get};

use super::controller::{health, info};
use crate::state::AppState;

pub fn init_system_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
}
