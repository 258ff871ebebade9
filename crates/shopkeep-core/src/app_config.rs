use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime configuration for the shopkeep tools.
///
/// Store and supplier credentials are `Option` because each subcommand only
/// needs its own pair; the command that needs a missing value fails fast with
/// a diagnostic naming the variable.
#[derive(Clone)]
pub struct AppConfig {
    /// `*.myshopify.com` domain of the store to clean up.
    pub store_domain: Option<String>,
    /// Admin API access token for the store, sent as `X-Shopify-Access-Token`.
    pub access_token: Option<String>,
    /// Base URL of the supplier catalog endpoint.
    pub supplier_base_url: Option<String>,
    /// Supplier API token.
    pub supplier_token: Option<String>,
    /// Admin API version path segment, e.g. `2024-07`.
    pub api_version: String,
    pub log_level: String,
    /// Maximum number of products requested per page.
    pub page_size: u32,
    /// Explicit timeout applied to every HTTP request.
    pub request_timeout_secs: u64,
    /// Delay between successful page fetches.
    pub inter_page_delay_ms: u64,
    /// Total attempts per page request (1 disables retries).
    pub retry_max_attempts: u32,
    /// Fixed delay between attempts on the same page.
    pub retry_delay_secs: u64,
    /// Delay after every delete request, regardless of outcome.
    pub delete_delay_ms: u64,
}

impl AppConfig {
    /// Store domain and access token, required by the cleanup command.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable.
    pub fn store_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let domain = self
            .store_domain
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPKEEP_STORE_DOMAIN".to_owned()))?;
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPKEEP_ACCESS_TOKEN".to_owned()))?;
        Ok((domain, token))
    }

    /// Supplier base URL and token, required by the pull command.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable.
    pub fn supplier_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let base_url = self
            .supplier_base_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPKEEP_SUPPLIER_BASE_URL".to_owned()))?;
        let token = self
            .supplier_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SHOPKEEP_SUPPLIER_TOKEN".to_owned()))?;
        Ok((base_url, token))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("store_domain", &self.store_domain)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("supplier_base_url", &self.supplier_base_url)
            .field(
                "supplier_token",
                &self.supplier_token.as_ref().map(|_| "[redacted]"),
            )
            .field("api_version", &self.api_version)
            .field("log_level", &self.log_level)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_page_delay_ms", &self.inter_page_delay_ms)
            .field("retry_max_attempts", &self.retry_max_attempts)
            .field("retry_delay_secs", &self.retry_delay_secs)
            .field("delete_delay_ms", &self.delete_delay_ms)
            .finish()
    }
}
