//! `reqwest` implementation of the link gateway.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::domain::entities::ClickStats;
use crate::domain::gateways::LinkGateway;
use crate::error::AppError;
use crate::infrastructure::vk::dto::{
    CheckLinkResponse, LinkStatsResponse, ShortLinkResponse, parse_envelope,
};

const GET_SHORT_LINK: &str = "utils.getShortLink";
const GET_LINK_STATS: &str = "utils.getLinkStats";
const CHECK_LINK: &str = "utils.checkLink";

/// HTTP client for the VK `utils.*` methods.
///
/// Every request is a GET carrying the API version as `v` and the token as a
/// bearer `Authorization` header. The whole call, body included, is bounded
/// by the configured timeout. Requests are never retried.
pub struct VkClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    api_version: String,
}

impl VkClient {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `https://api.vk.ru/method`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Request`] if the TLS backend cannot be initialised.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        api_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            api_version: api_version.into(),
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.api_base_url.clone(),
            config.vk_token.clone(),
            config.api_version.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = format!("{}/{}", self.base_url, method);
        tracing::debug!(method, "Calling VK API");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .query(&[("v", self.api_version.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;

        parse_envelope(&body).inspect_err(|e| {
            tracing::warn!(method, code = e.code(), details = %e.details(), "VK API returned an error");
        })
    }
}

#[async_trait]
impl LinkGateway for VkClient {
    async fn shorten(&self, link: &str) -> Result<String, AppError> {
        let response: ShortLinkResponse = self.call(GET_SHORT_LINK, &[("url", link)]).await?;
        Ok(response.short_url)
    }

    async fn link_stats(&self, key: &str) -> Result<ClickStats, AppError> {
        let response: LinkStatsResponse = self.call(GET_LINK_STATS, &[("key", key)]).await?;
        Ok(ClickStats::from_first(
            response.stats.into_iter().map(|entry| entry.views),
        ))
    }

    async fn check_link(&self, link: &str) -> Result<String, AppError> {
        let response: CheckLinkResponse = self.call(CHECK_LINK, &[("url", link)]).await?;
        Ok(response.link)
    }
}
