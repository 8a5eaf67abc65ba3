use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Largest `limit` accepted by paginated endpoints.
    pub max_page_limit: i64,
    /// Allowed CORS origin; any origin when unset.
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Only `DATABASE_URL` is required. Numeric settings that fail to parse
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")?,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: lookup("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: lookup("BACKEND_PORT")
                .unwrap_or_else(|_| "9090".to_string())
                .parse()
                .unwrap_or(9090),
            max_page_limit: lookup("MAX_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i64| *v > 0)
                .unwrap_or(1000),
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN").ok().filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/news")]))
                .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/news");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_page_limit, 1000);
        assert!(config.cors_allow_origin.is_none());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("BACKEND_PORT", "8080")]));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/news"),
            ("BACKEND_PORT", "not-a-port"),
            ("MAX_PAGE_LIMIT", "-5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_page_limit, 1000);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/news"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("MAX_PAGE_LIMIT", "50"),
            ("CORS_ALLOW_ORIGIN", "https://news.example"),
        ]))
        .unwrap();
        assert_eq!(config.database_max_connections, 3);
        assert_eq!(config.max_page_limit, 50);
        assert_eq!(
            config.cors_allow_origin.as_deref(),
            Some("https://news.example")
        );
    }
}
