//! Shared-secret token validation.

use std::fmt;

use apikit_core::AppError;
use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use validator::{Validate, ValidationErrors};

use crate::scheme::extract_credentials;

/// Proof that a request presented the configured secret.
///
/// `issued_at` is the time of validation, not a server-issued timestamp.
#[derive(Clone, Validate)]
pub struct ValidatedToken {
    #[validate(length(min = 1, max = 4096))]
    pub token: String,
    pub issued_at: DateTime<Local>,
}

impl ValidatedToken {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationErrors> {
        let validated = Self {
            token: token.into(),
            issued_at: Local::now(),
        };
        validated.validate()?;
        Ok(validated)
    }
}

impl fmt::Debug for ValidatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedToken")
            .field("token", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Checks a credential against `secret`.
///
/// The credential is trimmed first and must equal the secret exactly.
///
/// # Errors
///
/// - [`AppError::Forbidden`] when the credential does not match.
/// - [`AppError::Unauthorized`] when it matches but is not a valid token.
pub fn validate_token(credentials: &str, secret: &str) -> Result<ValidatedToken, AppError> {
    let token = credentials.trim();

    if !secrets_match(token, secret) {
        return Err(AppError::Forbidden);
    }

    ValidatedToken::new(token).map_err(|_| AppError::Unauthorized)
}

/// Extracts the credential from an `Authorization` header value and validates it.
pub fn authenticate(header: Option<&str>, secret: &str) -> Result<ValidatedToken, AppError> {
    let credentials = extract_credentials(header)?;
    validate_token(&credentials.credentials, secret)
}

// Digests first so the comparison time depends on neither the length of the
// secret nor the length of any matching prefix.
fn secrets_match(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    bool::from(provided.as_slice().ct_eq(expected.as_slice()))
}
