//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed by reference
//! into the VK client and the link service. It is never mutated afterwards.
//!
//! ```bash
//! export VK_TOKEN="vk1.a.xxxxx"
//! export SHORT_LINK_CHECK="host"   # optional
//! ```
//!
//! ## Required Variables
//!
//! - `VK_TOKEN` - Access token sent as a bearer `Authorization` header
//!
//! ## Optional Variables
//!
//! - `VK_API_BASE_URL` - API root (default: `https://api.vk.ru/method`)
//! - `VK_API_VERSION` - Value of the `v` query parameter (default: `5.199`)
//! - `VK_REQUEST_TIMEOUT` - Per-call timeout in seconds (default: 30)
//! - `VK_SHORT_DOMAIN` - Host of short links for the `host` check (default: `vk.cc`)
//! - `SHORT_LINK_CHECK` - `remote` or `host` (default: `remote`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::ShortLinkCheck;

pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.ru/method";
pub const DEFAULT_API_VERSION: &str = "5.199";
pub const DEFAULT_SHORT_DOMAIN: &str = "vk.cc";

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token (`VK_TOKEN`). Never logged.
    pub vk_token: String,
    pub api_base_url: String,
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub short_domain: String,
    pub link_check: ShortLinkCheck,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `VK_TOKEN` is missing, `VK_REQUEST_TIMEOUT` is not
    /// a non-negative integer, or `SHORT_LINK_CHECK` holds an unknown strategy.
    pub fn from_env() -> Result<Self> {
        let vk_token = env::var("VK_TOKEN").context("VK_TOKEN must be set")?;

        let api_base_url =
            env::var("VK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_version =
            env::var("VK_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let request_timeout_secs: u64 = match env::var("VK_REQUEST_TIMEOUT") {
            Ok(v) => v.trim().parse().with_context(|| {
                format!("VK_REQUEST_TIMEOUT must be a number of seconds, got '{v}'")
            })?,
            Err(_) => 30,
        };

        let short_domain =
            env::var("VK_SHORT_DOMAIN").unwrap_or_else(|_| DEFAULT_SHORT_DOMAIN.to_string());

        let link_check: ShortLinkCheck = match env::var("SHORT_LINK_CHECK") {
            Ok(v) => v
                .parse()
                .context("SHORT_LINK_CHECK must be 'remote' or 'host'")?,
            Err(_) => ShortLinkCheck::default(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            vk_token,
            api_base_url,
            api_version,
            request_timeout_secs,
            short_domain,
            link_check,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `vk_token` is empty
    /// - `api_base_url` is not an HTTP(S) URL
    /// - `request_timeout_secs` is 0
    /// - `short_domain` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.vk_token.trim().is_empty() {
            anyhow::bail!("VK_TOKEN must not be empty");
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "VK_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

        if self.api_version.is_empty() {
            anyhow::bail!("VK_API_VERSION must not be empty");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("VK_REQUEST_TIMEOUT must be greater than 0");
        }

        if self.short_domain.is_empty() {
            anyhow::bail!("VK_SHORT_DOMAIN must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  API: {} (v{})", self.api_base_url, self.api_version);
        tracing::debug!("  Token: {}", mask_token(&self.vk_token));
        tracing::debug!("  Timeout: {}s", self.request_timeout_secs);
        tracing::debug!("  Short link check: {}", self.link_check);
        tracing::debug!("  Short domain: {}", self.short_domain);
    }
}

/// Masks a token for logging, keeping only the first four characters.
///
/// - `vk1.a.secret` → `vk1.***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    match token.char_indices().nth(4) {
        Some((idx, _)) => format!("{}***", &token[..idx]),
        None => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
