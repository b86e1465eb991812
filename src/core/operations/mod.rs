//! Cryptographic operations for envelopes.
//!
//! - [`kem`] - Session key wrapping (RSA-OAEP-SHA256)
//! - [`aead`] - Payload encryption (AES-256-GCM)
//! - [`hybrid`] - The two combined into string-in, string-out sealing

pub mod aead;
pub mod hybrid;
pub mod kem;
