//! VK API client.
//!
//! - [`client`] - [`VkClient`], the `reqwest` implementation of
//!   [`crate::domain::gateways::LinkGateway`]
//! - [`dto`] - Wire types for the `{"response": ...}` / `{"error": ...}` envelope

pub mod client;
pub mod dto;

pub use client::VkClient;
