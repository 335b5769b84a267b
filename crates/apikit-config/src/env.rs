//! Environment variable access.
//!
//! All lookups go through [`EnvSource`] so configuration can be assembled
//! from the real process environment ([`ProcessEnv`]) or from an in-memory
//! map ([`MapEnv`]) in tests.

use std::collections::HashMap;
use std::fs;

/// A source of environment variables.
pub trait EnvSource {
    /// Raw lookup. `None` when the variable is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// The value of `name`, or `default` when it is not set.
    ///
    /// No coercion is applied; a variable set to the empty string is returned as is.
    fn get(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }

    /// Reads a secret from the file named by `file_var`, falling back to `env_var`.
    ///
    /// The file contents are trimmed. A missing or unreadable file is not an
    /// error; the lookup falls through to `get(env_var, default)`.
    fn get_secret(&self, file_var: &str, env_var: &str, default: &str) -> String {
        if let Some(path) = self.var(file_var) {
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    tracing::debug!(variable = file_var, "loaded secret from file");
                    return contents.trim().to_string();
                }
                Err(err) => {
                    tracing::warn!(
                        variable = file_var,
                        path = %path,
                        error = %err,
                        "secret file not readable, falling back to environment"
                    );
                }
            }
        }

        match self.var(env_var) {
            Some(value) => {
                tracing::debug!(variable = env_var, "loaded secret from environment");
                value
            }
            None => {
                tracing::debug!(variable = env_var, "secret not set, using default");
                default.to_string()
            }
        }
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// `name` from the process environment, or `default`.
pub fn get_env(name: &str, default: &str) -> String {
    ProcessEnv.get(name, default)
}

/// Parses a loose boolean.
///
/// Case-insensitive `true`, `1`, `yes`, `y`, `t` map to `Some(true)`;
/// `false`, `0`, `no`, `n`, `f` map to `Some(false)`; anything else,
/// including `None`, maps to `None`.
pub fn get_bool(value: Option<&str>) -> Option<bool> {
    match value?.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "t" => Some(true),
        "false" | "0" | "no" | "n" | "f" => Some(false),
        _ => None,
    }
}

/// Splits a comma-separated list, trimming segments and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Loads a `.env` file into the process environment if one is present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "failed to load .env file"),
    }
}
