//! Click statistics for a shortened link.

/// Aggregate view count for a short link.
///
/// The vendor returns a list of per-interval entries; only the first one is
/// reported, and an empty list means no recorded clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickStats {
    pub views: u64,
}

impl ClickStats {
    pub fn new(views: u64) -> Self {
        Self { views }
    }

    /// Builds stats from the vendor's entry list, taking the first entry.
    pub fn from_first<I>(views: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            views: views.into_iter().next().unwrap_or(0),
        }
    }
}
