//! Domain layer: entities and the gateway trait.
//!
//! - [`entities`] - Core data structures
//! - [`gateways`] - Contract for the remote link API, implemented in
//!   [`crate::infrastructure`]

pub mod entities;
pub mod gateways;
