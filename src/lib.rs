//! # apikit
//!
//! A minimal web API scaffold: configuration from the environment, shared-secret
//! bearer authentication, a uniform error envelope and OpenAPI documentation.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── apikit-core/     # AppError taxonomy, diagnostic formatter, small utilities
//! ├── apikit-config/   # EnvSource, Lazy<T>, Settings, CorsConfig
//! └── apikit-auth/     # Authorization header parsing and token validation
//! src/
//! ├── middleware/      # Token guard, panic boundary, x-process-time
//! ├── modules/         # Feature modules
//! │   ├── system/     # Health and project info
//! │   └── auth/       # Token verification
//! ├── docs.rs          # OpenAPI document, Swagger UI, ReDoc, Scalar
//! ├── logging.rs       # tracing setup and request logging
//! └── router.rs        # Route assembly and layers
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: Response types
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Protected routes expect `Authorization: Bearer <token>` (or `Token <token>`)
//! where `<token>` equals the configured secret. Failures answer 403 with
//! `WWW-Authenticate: Bearer`.
//!
//! ## Configuration
//!
//! See [`apikit_config::settings`] for the full list of environment variables.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use apikit_auth as auth;
pub use apikit_config as config;
pub use apikit_core as core;
