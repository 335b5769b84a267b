use axum::{Router, routing::get};

use super::controller::verify_token;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/verify", get(verify_token))
}
