//! Shortening and click-count service.

use std::sync::Arc;

use crate::domain::entities::{LinkReport, ShortLinkCheck};
use crate::domain::gateways::LinkGateway;
use crate::error::AppError;
use crate::utils::url_validator::{extract_stats_key, is_short_host, validate_link};
use serde_json::json;
use url::Url;

/// Service that shortens a link or reports clicks for an already short one.
///
/// Runs `validate → is shortened? → count clicks | shorten → report` for a
/// single link. Nothing is retried; the first failure ends the run.
pub struct LinkService<G: LinkGateway> {
    gateway: Arc<G>,
    check: ShortLinkCheck,
    short_domain: String,
}

impl<G: LinkGateway> LinkService<G> {
    /// Creates a new link service.
    ///
    /// `short_domain` is only consulted by [`ShortLinkCheck::Host`].
    pub fn new(gateway: Arc<G>, check: ShortLinkCheck, short_domain: impl Into<String>) -> Self {
        Self {
            gateway,
            check,
            short_domain: short_domain.into(),
        }
    }

    /// Shortens a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed link,
    /// [`AppError::Api`] when the vendor rejects it and
    /// [`AppError::Request`] on transport failures.
    pub async fn shorten(&self, link: &str) -> Result<String, AppError> {
        parse_link(link)?;
        self.gateway
            .shorten(link.trim())
            .await
            .map_err(|e| with_api_message(e, "Произошла ошибка при формировании ссылки"))
    }

    /// Returns the number of views recorded for a short link, `0` if none.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`].
    pub async fn count_clicks(&self, link: &str) -> Result<u64, AppError> {
        let url = parse_link(link)?;
        let key = extract_stats_key(&url);

        let stats = self.gateway.link_stats(&key).await.map_err(|e| {
            with_api_message(
                e,
                format!("Произошла ошибка при получении статистики переходов по ссылке: {link}"),
            )
        })?;

        Ok(stats.views)
    }

    /// Returns true if the link is already a short link.
    ///
    /// # Strategies
    ///
    /// - [`ShortLinkCheck::Remote`] asks the vendor to resolve the link; it is
    ///   short when the resolved link differs from the input.
    /// - [`ShortLinkCheck::Host`] compares the host with the short domain and
    ///   makes no network call.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`]. The host strategy only fails validation.
    pub async fn is_shortened(&self, link: &str) -> Result<bool, AppError> {
        let url = parse_link(link)?;
        self.is_shortened_url(link, &url).await
    }

    /// Runs the whole flow for one link and returns what happened.
    ///
    /// # Errors
    ///
    /// The validation error is returned before any gateway call is made.
    pub async fn process(&self, link: &str) -> Result<LinkReport, AppError> {
        let url = parse_link(link)?;
        let link = link.trim();

        if self.is_shortened_url(link, &url).await? {
            tracing::debug!(link, "Link is already short, counting clicks");
            let views = self.count_clicks(link).await?;
            Ok(LinkReport::Clicks {
                link: link.to_string(),
                views,
            })
        } else {
            tracing::debug!(link, "Shortening link");
            let short_url = self.shorten(link).await?;
            Ok(LinkReport::Shortened { short_url })
        }
    }

    /// Runs [`Self::process`] and renders the outcome as the line shown to
    /// the user, success or error.
    pub async fn report(&self, link: &str) -> String {
        match self.process(link).await {
            Ok(report) => report.to_string(),
            Err(e) => {
                tracing::warn!(code = e.code(), details = %e.details(), "{e}");
                e.to_string()
            }
        }
    }

    async fn is_shortened_url(&self, link: &str, url: &Url) -> Result<bool, AppError> {
        match self.check {
            ShortLinkCheck::Host => Ok(is_short_host(url, &self.short_domain)),
            ShortLinkCheck::Remote => {
                let resolved = self.gateway.check_link(link.trim()).await.map_err(|e| {
                    with_api_message(e, format!("Произошла ошибка при проверке ссылки: {link}"))
                })?;
                Ok(resolved != link.trim())
            }
        }
    }
}

fn parse_link(link: &str) -> Result<Url, AppError> {
    validate_link(link).map_err(|e| {
        AppError::validation(
            format!("Некорректная ссылка: \"{link}\""),
            json!({ "reason": e.to_string() }),
        )
    })
}

/// Replaces the message of an API error with an operation-specific one,
/// keeping the vendor details. Other errors pass through untouched.
fn with_api_message(error: AppError, message: impl Into<String>) -> AppError {
    match error {
        AppError::Api { details, .. } => AppError::api(message, details),
        other => other,
    }
}
