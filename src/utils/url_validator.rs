//! Link validation and the URL helpers the VK methods need.
//!
//! A link must be an absolute HTTP or HTTPS URL with a host before any remote
//! call is made.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};
use validator::Validate;

/// One DNS label: letters, digits and inner hyphens.
static LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").unwrap());

/// Top-level domain: alphabetic, or an IDN in punycode.
static TLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]{2,63}|xn--[a-z0-9-]{1,59})$").unwrap());

/// Errors that can occur during link validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("Host is not a fully qualified domain or IP address: {0}")]
    UnqualifiedHost(String),
}

/// User-supplied link, checked with the same `validator` rules the rest of
/// the input layer uses.
#[derive(Debug, Validate)]
pub struct LinkInput {
    #[validate(url(message = "Invalid URL format"))]
    pub link: String,
}

/// Validates a link and returns it parsed.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for anything that is not an
/// absolute URL, [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes such as `mailto:` or `javascript:`, and
/// [`UrlValidationError::MissingHost`] when the authority is empty and
/// [`UrlValidationError::UnqualifiedHost`] when the host is neither an IP
/// address nor a dotted domain with a top-level domain (`https://localhost`,
/// `https://exa_mple.com`).
///
/// # Examples
///
/// ```ignore
/// assert!(validate_link("https://example.com").is_ok());
/// assert!(validate_link("not a url").is_err());
/// ```
pub fn validate_link(input: &str) -> Result<Url, UrlValidationError> {
    let candidate = LinkInput {
        link: input.trim().to_string(),
    };
    candidate
        .validate()
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    let url = Url::parse(&candidate.link)
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        Some(Host::Domain(domain)) if domain.is_empty() => {
            return Err(UrlValidationError::MissingHost);
        }
        Some(Host::Domain(domain)) if !is_qualified_domain(domain) => {
            return Err(UrlValidationError::UnqualifiedHost(domain.to_string()));
        }
        Some(Host::Domain(_)) => {}
        None => return Err(UrlValidationError::MissingHost),
    }

    Ok(url)
}

/// Returns true for a dotted domain whose labels are valid hostname labels
/// and whose last label is a top-level domain.
fn is_qualified_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain).to_ascii_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();

    match labels.split_last() {
        Some((tld, rest)) if !rest.is_empty() => {
            TLD_REGEX.is_match(tld) && rest.iter().all(|label| LABEL_REGEX.is_match(label))
        }
        _ => false,
    }
}

/// Derives the `utils.getLinkStats` key from a short link.
///
/// The key is the path with leading and trailing slashes stripped. An empty
/// key is passed through as-is and left for the vendor to reject.
pub fn extract_stats_key(url: &Url) -> String {
    url.path().trim_matches('/').to_string()
}

/// Returns true when the link is hosted on `short_domain`.
///
/// Host comparison ignores ASCII case and a trailing root dot.
pub fn is_short_host(url: &Url, short_domain: &str) -> bool {
    url.host_str().is_some_and(|host| {
        host.trim_end_matches('.')
            .eq_ignore_ascii_case(short_domain.trim_end_matches('.'))
    })
}
