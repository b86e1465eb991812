//! Core envelope types and operations.
//!
//! - [`error`] - Error types for envelope operations
//! - [`types`] - Keys, session keys and the envelope wire format
//! - [`operations`] - Key encapsulation, payload encryption, and both combined

pub mod error;
pub mod operations;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{EnvelopeError, EnvelopeResult};
