//! `Authorization` header parsing.

use std::fmt;

use apikit_core::AppError;

/// Schemes accepted for the shared-secret token, compared case-insensitively.
pub const ACCEPTED_SCHEMES: [&str; 2] = ["bearer", "token"];

/// Scheme and credential as presented by the client, unchanged in case.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub scheme: String,
    pub credentials: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("scheme", &self.scheme)
            .field("credentials", &"<redacted>")
            .finish()
    }
}

/// Splits an `Authorization` header value into scheme and credential.
///
/// The value is split at its first whitespace character.
///
/// # Errors
///
/// - [`AppError::Unauthenticated`] when the header is absent or empty, or
///   when either half of the split is empty.
/// - [`AppError::InvalidScheme`] when the scheme is neither `bearer` nor `token`.
pub fn extract_credentials(header: Option<&str>) -> Result<Credentials, AppError> {
    let header = header
        .filter(|value| !value.is_empty())
        .ok_or(AppError::Unauthenticated)?;

    let (scheme, credentials) = header
        .split_once(|c: char| c.is_ascii_whitespace())
        .ok_or(AppError::Unauthenticated)?;

    if scheme.is_empty() || credentials.is_empty() {
        return Err(AppError::Unauthenticated);
    }

    if !is_accepted_scheme(scheme) {
        return Err(AppError::InvalidScheme);
    }

    Ok(Credentials {
        scheme: scheme.to_string(),
        credentials: credentials.to_string(),
    })
}

pub fn is_accepted_scheme(scheme: &str) -> bool {
    ACCEPTED_SCHEMES
        .iter()
        .any(|accepted| scheme.eq_ignore_ascii_case(accepted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let credentials = extract_credentials(Some("Bearer abc123")).unwrap();
        assert_eq!(credentials.scheme, "Bearer");
        assert_eq!(credentials.credentials, "abc123");
    }

    #[test]
    fn test_token_scheme_any_case() {
        let credentials = extract_credentials(Some("tOkEn XyZ")).unwrap();
        assert_eq!(credentials.scheme, "tOkEn");
        assert_eq!(credentials.credentials, "XyZ");
    }

    #[test]
    fn test_splits_on_first_whitespace_only() {
        let credentials = extract_credentials(Some("bearer a b")).unwrap();
        assert_eq!(credentials.credentials, "a b");
    }

    #[test]
    fn test_missing_or_empty_header() {
        assert_eq!(extract_credentials(None), Err(AppError::Unauthenticated));
        assert_eq!(extract_credentials(Some("")), Err(AppError::Unauthenticated));
    }

    #[test]
    fn test_unsplittable_header() {
        assert_eq!(
            extract_credentials(Some("Bearer")),
            Err(AppError::Unauthenticated)
        );
        assert_eq!(
            extract_credentials(Some("Bearer ")),
            Err(AppError::Unauthenticated)
        );
        assert_eq!(
            extract_credentials(Some(" abc123")),
            Err(AppError::Unauthenticated)
        );
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(
            extract_credentials(Some("Basic abc123")),
            Err(AppError::InvalidScheme)
        );
    }

    #[test]
    fn test_debug_redacts_credential() {
        let credentials = extract_credentials(Some("Bearer hunter2")).unwrap();
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
