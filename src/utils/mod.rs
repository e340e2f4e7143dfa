//! Utility functions for link handling.
//!
//! - [`url_validator`] - Link validation, stats key extraction and short-host check

pub mod url_validator;
