//! Process-wide settings.
//!
//! # Environment Variables
//!
//! | Variable                    | Default       |
//! |-----------------------------|---------------|
//! | `DEBUG`                     | `false`       |
//! | `PROJECT_NAME`              | `API Project` |
//! | `PROJECT_DESCRIPTION`       | `API Project` |
//! | `PROJECT_VERSION`           | `1.0.0`       |
//! | `TOKEN_AUTHORIZATION`       | `secret`      |
//! | `TOKEN_AUTHORIZATION_FILE`  | unset         |
//! | `HOST`                      | `0.0.0.0`     |
//! | `PORT`                      | `8000`        |
//! | `LOG_DIR`                   | unset         |
//!
//! plus the `CORS_*` variables read by [`CorsConfig`].
//!
//! When `TOKEN_AUTHORIZATION_FILE` names a readable file, its trimmed contents
//! take precedence over `TOKEN_AUTHORIZATION`. The token is resolved on first
//! use and never re-read.

use std::net::{IpAddr, SocketAddr};

use apikit_core::ConfigError;

use crate::cors::CorsConfig;
use crate::env::{EnvSource, ProcessEnv, get_bool, load_dotenv};
use crate::lazy::Lazy;

pub const DEFAULT_PROJECT_NAME: &str = "API Project";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "API Project";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";
pub const DEFAULT_TOKEN: &str = "secret";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Settings {
    pub debug: bool,
    pub project_name: String,
    pub project_description: String,
    pub project_version: String,
    pub token: Lazy<String>,
    pub cors: CorsConfig,
    pub addr: SocketAddr,
    /// Directory for the rolling error log; console only when unset.
    pub log_dir: Option<String>,
}

impl Settings {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_source(ProcessEnv)
    }

    pub fn from_source<E>(env: E) -> Result<Self, ConfigError>
    where
        E: EnvSource + Send + Sync + 'static,
    {
        let debug = get_bool(env.var("DEBUG").as_deref()).unwrap_or(false);

        let host = env.get("HOST", DEFAULT_HOST);
        let host: IpAddr = host.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: host.clone(),
        })?;

        let port = match env.var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let project_name = env.get("PROJECT_NAME", DEFAULT_PROJECT_NAME);
        let project_description = env.get("PROJECT_DESCRIPTION", DEFAULT_PROJECT_DESCRIPTION);
        let project_version = env.get("PROJECT_VERSION", DEFAULT_PROJECT_VERSION);
        let cors = CorsConfig::from_source(&env);
        let log_dir = env.var("LOG_DIR").filter(|dir| !dir.is_empty());

        let token = Lazy::new(move || {
            env.get_secret("TOKEN_AUTHORIZATION_FILE", "TOKEN_AUTHORIZATION", DEFAULT_TOKEN)
        });

        Ok(Self {
            debug,
            project_name,
            project_description,
            project_version,
            token,
            cors,
            addr: SocketAddr::new(host, port),
            log_dir,
        })
    }

    /// The shared authentication secret, resolved on first access.
    pub fn token(&self) -> &str {
        self.token.get()
    }
}
