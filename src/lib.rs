//! # vk-link
//!
//! Shortens links through the VK `utils` API, or reports the click count of
//! a link that is already short.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::gateways::LinkGateway`] trait
//! - **Application Layer** ([`application`]) - [`LinkService`], the validate/route/report flow
//! - **Infrastructure Layer** ([`infrastructure`]) - [`infrastructure::vk::VkClient`] over `reqwest`
//!
//! ## Quick Start
//!
//! ```bash
//! export VK_TOKEN="vk1.a.xxxxx"
//!
//! cargo run -- https://example.com
//! cargo run -- https://vk.cc/cKz1a
//! cargo run            # asks for the link
//! ```
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vk_link::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = vk_link::config::load_from_env()?;
//! let client = Arc::new(VkClient::from_config(&config)?);
//! let service = LinkService::new(client, config.link_check, config.short_domain.clone());
//!
//! println!("{}", service.report("https://example.com").await);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use application::services::LinkService;
pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{ClickStats, LinkReport, ShortLinkCheck};
    pub use crate::domain::gateways::LinkGateway;
    pub use crate::error::AppError;
    pub use crate::infrastructure::vk::VkClient;
}
