use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use apikit_auth::{ValidatedToken, authenticate};
use apikit_core::AppError;

use crate::state::AppState;

/// Extractor that checks the `Authorization` header against the configured secret.
///
/// When [`require_token`] already ran for the route, the token it stored in
/// the request extensions is reused.
#[derive(Debug, Clone)]
pub struct AuthToken(pub ValidatedToken);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(token) = parts.extensions.get::<ValidatedToken>() {
            return Ok(AuthToken(token.clone()));
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match authenticate(auth_header, state.settings.token()) {
            Ok(token) => Ok(AuthToken(token)),
            Err(err) => {
                tracing::warn!(
                    path = %parts.uri.path(),
                    reason = %err,
                    status = %err.status().as_u16(),
                    "authentication failed"
                );
                Err(err)
            }
        }
    }
}

/// Route guard: rejects the request unless it carries the shared secret.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::auth::require_token;
///
/// let protected = Router::new()
///     .route("/reports", get(reports))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_token));
/// ```
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthToken(token) = AuthToken::from_request_parts(&mut parts, &state).await?;
    parts.extensions.insert(token);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
