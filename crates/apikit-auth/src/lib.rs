//! # apikit Auth
//!
//! Shared-secret bearer authentication for the apikit API scaffold.
//!
//! This crate provides:
//!
//! - [`scheme`]: Parsing of the `Authorization` header into [`Credentials`]
//! - [`token`]: Checking credentials against the configured secret, producing a [`ValidatedToken`]
//!
//! # Flow
//!
//! ```text
//! Authorization: Bearer <token>
//!        │
//!        ▼
//! extract_credentials ──► Unauthenticated / InvalidScheme (403)
//!        │
//!        ▼
//! validate_token ───────► Forbidden (403) / Unauthorized (401)
//!        │
//!        ▼
//! ValidatedToken
//! ```
//!
//! Both `Bearer` and `Token` schemes are accepted, case-insensitively.
//!
//! # Example
//!
//! ```ignore
//! use apikit_auth::authenticate;
//!
//! let token = authenticate(Some("Bearer secret"), "secret")?;
//! assert_eq!(token.token, "secret");
//! ```

pub mod scheme;
pub mod token;

// Re-export commonly used types at crate root
pub use scheme::{Credentials, extract_credentials};
pub use token::{ValidatedToken, authenticate, validate_token};
