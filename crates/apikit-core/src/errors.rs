//! Application error taxonomy.
//!
//! Every failure that reaches the HTTP boundary is one of the [`AppError`]
//! variants. Authentication failures carry the `WWW-Authenticate: Bearer`
//! challenge and a `{"detail": ...}` body; internal failures always render
//! as a 500 with the `{"code": "Internal Server Error", "detail": ...}`
//! envelope.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::diagnostic::DiagnosticRecord;

/// Challenge sent with every authentication failure.
pub const BEARER_CHALLENGE: &str = "Bearer";

/// `code` field of the internal error envelope.
pub const INTERNAL_ERROR_CODE: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The `Authorization` header is missing or cannot be split into a
    /// scheme and a credential.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The scheme is neither `bearer` nor `token`.
    #[error("Invalid authentication credentials")]
    InvalidScheme,

    /// The credential is well-formed but does not match the shared secret.
    #[error("Invalid authentication credentials")]
    Forbidden,

    /// The credential matched but failed token shape validation.
    #[error("Invalid token")]
    Unauthorized,

    /// Anything else. `detail` holds the rendered diagnostic.
    #[error("{detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Builds an [`AppError::Internal`] by running the error formatter over `err`.
    ///
    /// Never panics: if the diagnostic cannot be rendered the plain error
    /// string is used instead.
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let err = err.into();
        let detail = DiagnosticRecord::from_error(&err).render_or_plain(&format!("{err:#}"));
        Self::Internal { detail }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidScheme | AppError::Forbidden => {
                StatusCode::FORBIDDEN
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// `WWW-Authenticate` value to send with the response, if any.
    pub fn challenge(&self) -> Option<&'static str> {
        match self {
            AppError::Internal { .. } => None,
            _ => Some(BEARER_CHALLENGE),
        }
    }

    pub fn is_auth_error(&self) -> bool {
        self.challenge().is_some()
    }
}

/// Body of every non-internal error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Body of a 500 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct InternalErrorResponse {
    pub code: String,
    pub detail: String,
}

impl InternalErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR_CODE.to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Internal { detail } => {
                tracing::error!(%detail, "unhandled error");
                (status, Json(InternalErrorResponse::new(detail))).into_response()
            }
            err => {
                let mut response = (
                    status,
                    Json(ErrorResponse {
                        detail: err.detail(),
                    }),
                )
                    .into_response();

                if let Some(challenge) = err.challenge() {
                    response
                        .headers_mut()
                        .insert(WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
                }

                response
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err)
    }
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {key}={value:?}")]
    Invalid { key: &'static str, value: String },
}
