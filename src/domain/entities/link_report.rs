//! Outcome of processing a single link.

use std::fmt;

/// What happened to a link: it was shortened, or its clicks were counted.
///
/// `Display` renders the line printed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkReport {
    Shortened { short_url: String },
    Clicks { link: String, views: u64 },
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkReport::Shortened { short_url } => {
                write!(f, "Сокращенная ссылка: {short_url}")
            }
            LinkReport::Clicks { link, views } => {
                write!(f, "По ссылке {link} зафиксировано {views} переход(ов)")
            }
        }
    }
}
