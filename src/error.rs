//! Error taxonomy shared by the service, the VK client and the CLI.

use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input link is not a well-formed absolute HTTP(S) URL.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The vendor answered, but reported a business error.
    #[error("{message}")]
    Api { message: String, details: Value },

    /// Transport failure, timeout or non-2xx HTTP status.
    #[error("{message}")]
    Request { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn api(message: impl Into<String>, details: Value) -> Self {
        Self::Api {
            message: message.into(),
            details,
        }
    }
    pub fn request(message: impl Into<String>, details: Value) -> Self {
        Self::Request {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code, used in structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Api { .. } => "api_error",
            AppError::Request { .. } => "request_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::Api { details, .. }
            | AppError::Request { details, .. } => details,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        let details = json!({
            "timeout": e.is_timeout(),
            "connect": e.is_connect(),
            "status": e.status().map(|s| s.as_u16()),
        });
        AppError::request(e.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = AppError::validation("Некорректная ссылка: \"x\"", json!({}));
        assert_eq!(err.to_string(), "Некорректная ссылка: \"x\"");
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::validation("", json!({})).code(), "validation_error");
        assert_eq!(AppError::api("", json!({})).code(), "api_error");
        assert_eq!(AppError::request("", json!({})).code(), "request_error");
    }

    #[test]
    fn test_details_are_kept() {
        let err = AppError::api("boom", json!({ "error_code": 5 }));
        assert_eq!(err.details()["error_code"], 5);
    }
}
