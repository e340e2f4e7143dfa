//! Infrastructure layer for external integrations.
//!
//! Implements the gateway trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`vk`] - HTTP client for the VK `utils.*` link methods

pub mod vk;
