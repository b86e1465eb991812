//! Error types for envelope operations.
//!
//! This module provides a unified error type for key handling, sealing and
//! opening. The receive-path errors share one message so that a remote
//! party cannot tell a bad padding apart from a bad tag or a truncated
//! envelope. The variant itself stays distinct for local diagnostics.

use thiserror::Error;

/// Message shared by every failure on the open path.
const OPEN_FAILED: &str = "Envelope could not be opened";

/// Errors that can occur when generating keys or sealing/opening envelopes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Key pair generation failed (randomness unavailable or the modulus
    /// size was rejected).
    #[error("Key generation failed")]
    KeyGeneration,

    /// The encoded key is malformed, of the wrong kind, or too small.
    #[error("Invalid key encoding")]
    KeyFormat,

    /// The session key could not be wrapped under the public key.
    #[error("Key encapsulation failed")]
    Encapsulation,

    /// The wrapped session key could not be recovered.
    /// Intentionally vague for security.
    #[error("{}", OPEN_FAILED)]
    Decapsulation,

    /// The envelope bytes or their text encoding are malformed.
    /// Intentionally vague for security.
    #[error("{}", OPEN_FAILED)]
    EnvelopeFormat,

    /// Authentication tag verification failed.
    /// Intentionally vague for security.
    #[error("{}", OPEN_FAILED)]
    Authentication,
}

impl EnvelopeError {
    /// Returns `true` for the errors a receiver can hit while opening an
    /// envelope.
    ///
    /// Callers should treat all of these the same way: the message cannot
    /// be trusted or recovered.
    #[must_use]
    pub const fn is_open_failure(&self) -> bool {
        matches!(
            self,
            Self::Decapsulation | Self::EnvelopeFormat | Self::Authentication
        )
    }
}

/// Result type alias for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
