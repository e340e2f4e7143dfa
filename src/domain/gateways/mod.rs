//! Port to the remote link-shortening API.
//!
//! The trait is implemented by [`crate::infrastructure::vk::VkClient`]; a
//! `mockall` mock is generated for unit tests.

pub mod link_gateway;

pub use link_gateway::LinkGateway;

#[cfg(test)]
pub use link_gateway::MockLinkGateway;
