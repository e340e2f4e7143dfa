//! Application layer services implementing business logic.
//!
//! Services validate input, drive the gateway and shape the result for the
//! caller.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, click counting and routing

pub mod services;
