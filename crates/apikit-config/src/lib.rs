//! # apikit Config
//!
//! Configuration types for the apikit API scaffold.
//!
//! Configuration is read from environment variables once, at process start,
//! and is immutable afterwards:
//!
//! - [`env`]: Typed environment lookups, boolean parsing, file-backed secrets
//! - [`lazy`]: Deferred, initialize-once values
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) policy
//! - [`settings`]: The process-wide [`Settings`] assembled from the above
//!
//! # Example
//!
//! ```ignore
//! use apikit_config::Settings;
//!
//! let settings = Settings::from_env()?;
//! println!("{} v{}", settings.project_name, settings.project_version);
//! ```

pub mod cors;
pub mod env;
pub mod lazy;
pub mod settings;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use env::{EnvSource, MapEnv, ProcessEnv, get_bool, get_env, split_list};
pub use lazy::Lazy;
pub use settings::Settings;
