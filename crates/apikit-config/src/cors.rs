use crate::env::{EnvSource, get_bool, split_list};

/// Value that allows anything when it appears in a CORS list.
pub const WILDCARD: &str = "*";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec![WILDCARD.to_string()],
            allow_methods: vec![WILDCARD.to_string()],
            allow_headers: vec![WILDCARD.to_string()],
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Reads `CORS_ALLOW_ORIGINS`, `CORS_ALLOW_METHODS`, `CORS_ALLOW_HEADERS`
    /// (comma-separated, default `*`) and `CORS_ALLOW_CREDENTIALS` (default `true`).
    ///
    /// An unparseable credentials flag disables credentials.
    pub fn from_source<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            allow_origins: split_list(&env.get("CORS_ALLOW_ORIGINS", WILDCARD)),
            allow_methods: split_list(&env.get("CORS_ALLOW_METHODS", WILDCARD)),
            allow_headers: split_list(&env.get("CORS_ALLOW_HEADERS", WILDCARD)),
            allow_credentials: get_bool(Some(&env.get("CORS_ALLOW_CREDENTIALS", "true")))
                .unwrap_or(false),
        }
    }

    pub fn any_origin(&self) -> bool {
        is_wildcard(&self.allow_origins)
    }

    pub fn any_method(&self) -> bool {
        is_wildcard(&self.allow_methods)
    }

    pub fn any_header(&self) -> bool {
        is_wildcard(&self.allow_headers)
    }
}

pub fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_defaults() {
        let config = CorsConfig::from_source(&MapEnv::new());
        assert_eq!(config, CorsConfig::default());
        assert!(config.any_origin());
        assert!(config.allow_credentials);
    }

    #[test]
    fn test_lists_from_env() {
        let env = MapEnv::new()
            .with("CORS_ALLOW_ORIGINS", "https://a.test,,https://b.test")
            .with("CORS_ALLOW_METHODS", "GET,POST")
            .with("CORS_ALLOW_HEADERS", "authorization");
        let config = CorsConfig::from_source(&env);

        assert_eq!(config.allow_origins, vec!["https://a.test", "https://b.test"]);
        assert_eq!(config.allow_methods, vec!["GET", "POST"]);
        assert_eq!(config.allow_headers, vec!["authorization"]);
        assert!(!config.any_origin());
    }

    #[test]
    fn test_credentials_flag() {
        let off = MapEnv::new().with("CORS_ALLOW_CREDENTIALS", "no");
        assert!(!CorsConfig::from_source(&off).allow_credentials);

        let garbage = MapEnv::new().with("CORS_ALLOW_CREDENTIALS", "sometimes");
        assert!(!CorsConfig::from_source(&garbage).allow_credentials);

        let on = MapEnv::new().with("CORS_ALLOW_CREDENTIALS", "Y");
        assert!(CorsConfig::from_source(&on).allow_credentials);
    }
}
