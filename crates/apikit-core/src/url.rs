//! HTTP(S) URL validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://",
        // domain name
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        // well-known single-label hosts
        r"localhost|web|",
        // IPv4 literal
        r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        // optional port
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error(
        "Invalid URL: {0}. Valid URL examples: http://example.com, https://example.com"
    )]
    Invalid(String),
}

/// Validates an `http`/`https` URL.
///
/// `None` passes through. A valid URL is returned with one trailing `/` removed.
pub fn validate_url(value: Option<&str>) -> Result<Option<String>, UrlError> {
    let Some(value) = value else {
        return Ok(None);
    };

    if !URL_PATTERN.is_match(value) {
        return Err(UrlError::Invalid(value.to_string()));
    }

    Ok(Some(value.strip_suffix('/').unwrap_or(value).to_string()))
}
