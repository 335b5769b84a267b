//! # apikit Core
//!
//! Core types, errors, and utilities for the apikit API scaffold.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: The closed [`AppError`] taxonomy with HTTP response conversion
//! - [`diagnostic`]: Error formatter turning failures into [`DiagnosticRecord`]s
//! - [`pagination`]: Previous/next link construction for page-based listings
//! - [`random`]: Cryptographically secure random strings
//! - [`url`]: HTTP(S) URL validation
//!
//! # Example
//!
//! ```ignore
//! use apikit_core::errors::AppError;
//! use apikit_core::diagnostic::DiagnosticRecord;
//!
//! // An authentication failure
//! let error = AppError::Forbidden;
//! assert_eq!(error.detail(), "Invalid authentication credentials");
//!
//! // An unhandled failure, formatted for the 500 envelope
//! let error = AppError::internal(anyhow::anyhow!("boom"));
//! ```

pub mod diagnostic;
pub mod errors;
pub mod pagination;
pub mod random;
pub mod url;

// Re-export commonly used types at crate root
pub use diagnostic::{DiagnosticRecord, exception_to_string};
pub use errors::{AppError, ConfigError, ErrorResponse, InternalErrorResponse};
pub use pagination::page_links;
pub use random::{RANDOM_STRING_CHARS, get_random_string};
pub use url::{UrlError, validate_url};
