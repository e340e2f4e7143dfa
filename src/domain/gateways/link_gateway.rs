//! Gateway trait for the vendor's link methods.

use crate::domain::entities::ClickStats;
use crate::error::AppError;
use async_trait::async_trait;

/// Remote operations offered by the link-shortening vendor.
///
/// Implementations return [`AppError::Request`] for transport failures and
/// non-2xx statuses, and [`AppError::Api`] when the vendor reports an error in
/// the response body. The `details` of an API error carry the vendor's
/// `error_code` and `error_msg`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkGateway: Send + Sync {
    /// Creates a short link for `link` and returns its URL.
    async fn shorten(&self, link: &str) -> Result<String, AppError>;

    /// Fetches click statistics for the short link identified by `key`.
    async fn link_stats(&self, key: &str) -> Result<ClickStats, AppError>;

    /// Resolves `link` through the vendor and returns the link it points to.
    ///
    /// For a link that is not short the vendor echoes it back.
    async fn check_link(&self, link: &str) -> Result<String, AppError>;
}
