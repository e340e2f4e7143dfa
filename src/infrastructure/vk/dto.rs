//! Wire types for VK API responses.
//!
//! Every method answers with a JSON object holding either a `response`
//! payload or an `error` object:
//!
//! ```text
//! {"response": {"short_url": "https://vk.cc/cKz1a", ...}}
//! {"error": {"error_code": 5, "error_msg": "User authorization failed", ...}}
//! ```

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct VkEnvelope<T> {
    pub response: Option<T>,
    pub error: Option<VkErrorBody>,
}

/// Vendor-reported error.
#[derive(Debug, Deserialize)]
pub struct VkErrorBody {
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}

/// Payload of `utils.getShortLink`.
#[derive(Debug, Deserialize)]
pub struct ShortLinkResponse {
    pub short_url: String,
}

/// Payload of `utils.getLinkStats`.
#[derive(Debug, Deserialize)]
pub struct LinkStatsResponse {
    #[serde(default)]
    pub stats: Vec<StatsEntry>,
}

/// One interval in `utils.getLinkStats`.
#[derive(Debug, Deserialize)]
pub struct StatsEntry {
    #[serde(default)]
    pub views: u64,
}

/// Payload of `utils.checkLink`.
#[derive(Debug, Deserialize)]
pub struct CheckLinkResponse {
    pub link: String,
}

/// Parses a response body and splits it into payload or API error.
///
/// The body is parsed as JSON first and the `error` object is inspected; the
/// raw text is never searched for error markers.
///
/// # Errors
///
/// Returns [`AppError::Api`] when the vendor reports an error, when the body
/// is not valid JSON for `T`, or when it carries neither `response` nor
/// `error`.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let envelope: VkEnvelope<T> = serde_json::from_str(body).map_err(|e| {
        AppError::api(
            "Malformed response from VK API",
            json!({ "reason": e.to_string() }),
        )
    })?;

    if let Some(error) = envelope.error {
        return Err(AppError::api(
            error.error_msg.clone(),
            json!({ "error_code": error.error_code, "error_msg": error.error_msg }),
        ));
    }

    envelope
        .response
        .ok_or_else(|| AppError::api("Empty response from VK API", json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_link() {
        let body = r#"{"response":{"short_url":"https://vk.cc/cKz1a","url":"https://example.com","key":"cKz1a","access_key":"x"}}"#;
        let parsed: ShortLinkResponse = parse_envelope(body).unwrap();
        assert_eq!(parsed.short_url, "https://vk.cc/cKz1a");
    }

    #[test]
    fn test_short_url_containing_error_is_not_an_error() {
        let body = r#"{"response":{"short_url":"https://vk.cc/error1"}}"#;
        let parsed: ShortLinkResponse = parse_envelope(body).unwrap();
        assert_eq!(parsed.short_url, "https://vk.cc/error1");
    }

    #[test]
    fn test_parse_vendor_error() {
        let body = r#"{"error":{"error_code":100,"error_msg":"One of the parameters specified was missing or invalid","request_params":[]}}"#;
        let err = parse_envelope::<ShortLinkResponse>(body).unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
        assert_eq!(err.details()["error_code"], 100);
    }

    #[test]
    fn test_parse_empty_stats() {
        let body = r#"{"response":{"key":"abc123","stats":[]}}"#;
        let parsed: LinkStatsResponse = parse_envelope(body).unwrap();
        assert!(parsed.stats.is_empty());
    }

    #[test]
    fn test_parse_stats_entries() {
        let body = r#"{"response":{"key":"abc123","stats":[{"timestamp":1700000000,"views":42},{"timestamp":1700003600,"views":1}]}}"#;
        let parsed: LinkStatsResponse = parse_envelope(body).unwrap();
        assert_eq!(parsed.stats.len(), 2);
        assert_eq!(parsed.stats[0].views, 42);
    }

    #[test]
    fn test_parse_check_link() {
        let body = r#"{"response":{"status":"not_banned","link":"https://example.com/"}}"#;
        let parsed: CheckLinkResponse = parse_envelope(body).unwrap();
        assert_eq!(parsed.link, "https://example.com/");
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_envelope::<ShortLinkResponse>("<html>502</html>").unwrap_err();
        assert!(matches!(err, AppError::Api { .. }));
    }

    #[test]
    fn test_parse_empty_envelope() {
        let err = parse_envelope::<ShortLinkResponse>("{}").unwrap_err();
        assert_eq!(err.to_string(), "Empty response from VK API");
    }
}
