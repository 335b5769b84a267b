//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Shared-secret token extractor and route guard
//! - [`panic`]: Last-resort 500 boundary for panicking handlers
//! - [`timing`]: `x-process-time` response header
//!
//! # Layer Order
//!
//! From the outside in: timing, request logging, CORS, panic boundary, routes.
//! Timing is outermost so every response carries the header, including CORS
//! preflights and 500s produced by the panic boundary.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (or `Token <token>`)
//! 2. [`auth::require_token`] or the [`auth::AuthToken`] extractor checks it
//!    against the configured secret
//! 3. Handler executes with the [`apikit_auth::ValidatedToken`]

pub mod auth;
pub mod panic;
pub mod timing;
