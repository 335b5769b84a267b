use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use apikit_auth::ValidatedToken;

/// Confirmation that the presented token is the shared secret.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub authenticated: bool,
    /// When the token was validated, RFC 3339 with local offset.
    pub issued_at: DateTime<Local>,
}

impl From<&ValidatedToken> for VerifyResponse {
    fn from(token: &ValidatedToken) -> Self {
        Self {
            authenticated: true,
            issued_at: token.issued_at,
        }
    }
}
