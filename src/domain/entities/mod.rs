//! Core domain entities.
//!
//! Entities are plain data structures with no knowledge of HTTP or the CLI.
//!
//! # Entity Types
//!
//! - [`ClickStats`] - View count recorded against a short link
//! - [`LinkReport`] - Outcome of processing one link
//! - [`ShortLinkCheck`] - Strategy used to decide whether a link is already short

pub mod click_stats;
pub mod link_report;
pub mod short_link_check;

pub use click_stats::ClickStats;
pub use link_report::LinkReport;
pub use short_link_check::{ShortLinkCheck, UnknownCheckError};
