//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Default search endpoint root (EUIPO sandbox).
const DEFAULT_BASE_URL: &str = "https://api-sandbox.euipo.europa.eu/trademark-search";

/// Environment-derived configuration shared by the CLI commands that talk to
/// the registry.
///
/// The bearer access token is deliberately not part of this struct: it is a
/// per-run secret supplied on the command line (or its env fallback) and never
/// held longer than the run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search API root; the `trademarks` endpoint is appended by the client.
    pub base_url: String,
    /// Value of the client-identifier header sent with every request.
    pub client_id: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let client_id = require("MARKSCAN_CLIENT_ID")?;
    let base_url = or_default("MARKSCAN_BASE_URL", DEFAULT_BASE_URL);
    let request_timeout_secs = parse_u64("MARKSCAN_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        base_url,
        client_id,
        request_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MARKSCAN_CLIENT_ID", "test-client-id");
        m
    }

    #[test]
    fn build_app_config_fails_without_client_id() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MARKSCAN_CLIENT_ID"),
            "expected MissingEnvVar(MARKSCAN_CLIENT_ID), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
        assert_eq!(cfg.client_id, "test-client-id");
        assert_eq!(
            cfg.base_url,
            "https://api-sandbox.euipo.europa.eu/trademark-search"
        );
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_base_url_override() {
        let mut map = full_env();
        map.insert("MARKSCAN_BASE_URL", "http://localhost:9999/search");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:9999/search");
    }

    #[test]
    fn build_app_config_timeout_override() {
        let mut map = full_env();
        map.insert("MARKSCAN_REQUEST_TIMEOUT_SECS", "90");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 90);
    }

    #[test]
    fn build_app_config_timeout_invalid() {
        let mut map = full_env();
        map.insert("MARKSCAN_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MARKSCAN_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MARKSCAN_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
