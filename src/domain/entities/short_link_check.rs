//! Strategies for deciding whether a link is already shortened.

use std::fmt;
use std::str::FromStr;

/// How `IsShortened` is answered.
///
/// The two strategies can disagree. A non-canonical link on the short domain
/// is short by `Host` but may be echoed back unchanged by `Remote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortLinkCheck {
    /// Ask `utils.checkLink`; the link is short when the vendor resolves it
    /// to something else.
    #[default]
    Remote,
    /// Compare the link's host with the configured short domain. No network.
    Host,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown short link check '{0}', expected 'remote' or 'host'")]
pub struct UnknownCheckError(pub String);

impl FromStr for ShortLinkCheck {
    type Err = UnknownCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "host" => Ok(Self::Host),
            _ => Err(UnknownCheckError(s.to_string())),
        }
    }
}

impl fmt::Display for ShortLinkCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortLinkCheck::Remote => f.write_str("remote"),
            ShortLinkCheck::Host => f.write_str("host"),
        }
    }
}
