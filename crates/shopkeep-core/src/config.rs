use crate::app_config::{AppConfig, ConfigError};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value cannot be parsed. No variable is
/// unconditionally required at load time; command-scoped credentials are
/// validated by the command that needs them.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_domain = lookup("SHOPKEEP_STORE_DOMAIN").ok();
    let access_token = lookup("SHOPKEEP_ACCESS_TOKEN").ok();
    let supplier_base_url = lookup("SHOPKEEP_SUPPLIER_BASE_URL").ok();
    let supplier_token = lookup("SHOPKEEP_SUPPLIER_TOKEN").ok();

    let api_version = or_default("SHOPKEEP_API_VERSION", "2024-07");
    let log_level = or_default("SHOPKEEP_LOG_LEVEL", "info");

    let page_size = parse_u32("SHOPKEEP_PAGE_SIZE", "250")?;
    let request_timeout_secs = parse_u64("SHOPKEEP_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_page_delay_ms = parse_u64("SHOPKEEP_INTER_PAGE_DELAY_MS", "2000")?;
    let retry_max_attempts = parse_u32("SHOPKEEP_RETRY_MAX_ATTEMPTS", "3")?;
    let retry_delay_secs = parse_u64("SHOPKEEP_RETRY_DELAY_SECS", "5")?;
    let delete_delay_ms = parse_u64("SHOPKEEP_DELETE_DELAY_MS", "600")?;

    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPKEEP_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }
    if retry_max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPKEEP_RETRY_MAX_ATTEMPTS".to_string(),
            reason: "at least one attempt is required".to_string(),
        });
    }
    if request_timeout_secs == 0 {
        // A zero reqwest timeout fails every request instantly.
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPKEEP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        store_domain,
        access_token,
        supplier_base_url,
        supplier_token,
        api_version,
        log_level,
        page_size,
        request_timeout_secs,
        inter_page_delay_ms,
        retry_max_attempts,
        retry_delay_secs,
        delete_delay_ms,
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

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should load");
        assert!(cfg.store_domain.is_none());
        assert!(cfg.access_token.is_none());
        assert!(cfg.supplier_base_url.is_none());
        assert!(cfg.supplier_token.is_none());
        assert_eq!(cfg.api_version, "2024-07");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.page_size, 250);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.inter_page_delay_ms, 2000);
        assert_eq!(cfg.retry_max_attempts, 3);
        assert_eq!(cfg.retry_delay_secs, 5);
        assert_eq!(cfg.delete_delay_ms, 600);
    }

    #[test]
    fn build_app_config_picks_up_credentials() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_STORE_DOMAIN", "example.myshopify.com");
        map.insert("SHOPKEEP_ACCESS_TOKEN", "shpat_test");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.store_domain.as_deref(), Some("example.myshopify.com"));
        assert_eq!(cfg.access_token.as_deref(), Some("shpat_test"));
    }

    #[test]
    fn build_app_config_fails_on_unparsable_page_size() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_PAGE_SIZE", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPKEEP_PAGE_SIZE"),
            "expected InvalidEnvVar(SHOPKEEP_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_page_size() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_PAGE_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPKEEP_PAGE_SIZE"),
            "expected InvalidEnvVar(SHOPKEEP_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_attempts() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_RETRY_MAX_ATTEMPTS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPKEEP_RETRY_MAX_ATTEMPTS"),
            "expected InvalidEnvVar(SHOPKEEP_RETRY_MAX_ATTEMPTS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_request_timeout() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_REQUEST_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPKEEP_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SHOPKEEP_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn store_credentials_fail_fast_naming_the_missing_variable() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let result = cfg.store_credentials();
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPKEEP_STORE_DOMAIN"),
            "expected MissingEnvVar(SHOPKEEP_STORE_DOMAIN), got: {result:?}"
        );

        let mut map = HashMap::new();
        map.insert("SHOPKEEP_STORE_DOMAIN", "acme.myshopify.com");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let result = cfg.store_credentials();
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPKEEP_ACCESS_TOKEN"),
            "expected MissingEnvVar(SHOPKEEP_ACCESS_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn store_credentials_succeed_when_both_are_set() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_STORE_DOMAIN", "acme.myshopify.com");
        map.insert("SHOPKEEP_ACCESS_TOKEN", "shpat_test");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let (domain, token) = cfg.store_credentials().expect("both values are set");
        assert_eq!(domain, "acme.myshopify.com");
        assert_eq!(token, "shpat_test");
    }

    #[test]
    fn supplier_credentials_fail_fast_naming_the_missing_variable() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let result = cfg.supplier_credentials();
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPKEEP_SUPPLIER_BASE_URL"),
            "expected MissingEnvVar(SHOPKEEP_SUPPLIER_BASE_URL), got: {result:?}"
        );

        let mut map = HashMap::new();
        map.insert("SHOPKEEP_SUPPLIER_BASE_URL", "https://supplier.example.com/api/v2");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let result = cfg.supplier_credentials();
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPKEEP_SUPPLIER_TOKEN"),
            "expected MissingEnvVar(SHOPKEEP_SUPPLIER_TOKEN), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_tokens() {
        let mut map = HashMap::new();
        map.insert("SHOPKEEP_ACCESS_TOKEN", "shpat_secret_value");
        map.insert("SHOPKEEP_SUPPLIER_TOKEN", "supplier_secret_value");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("shpat_secret_value"));
        assert!(!rendered.contains("supplier_secret_value"));
        assert!(rendered.contains("[redacted]"));
    }
}
