use axum::Json;
use tracing::instrument;

use super::model::VerifyResponse;
use crate::middleware::auth::AuthToken;
use apikit_core::ErrorResponse;

/// Check that the request carries the shared secret
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token accepted", body = VerifyResponse),
        (status = 401, description = "Token matched but is malformed", body = ErrorResponse),
        (status = 403, description = "Missing header, unsupported scheme or wrong token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn verify_token(AuthToken(token): AuthToken) -> Json<VerifyResponse> {
    Json(VerifyResponse::from(&token))
}
