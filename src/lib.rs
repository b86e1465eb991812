//! Hybrid RSA / AES-GCM envelopes.
//!
//! This crate lets the holder of an RSA public key encrypt a payload of any
//! size so that only the holder of the matching private key can read it.
//! A one-time AES-256 key encrypts the payload; RSA-OAEP encrypts that key.
//! Both travel together in one base64url string.
//!
//! # Quick Start
//!
//! ```rust
//! use hybrid_envelope::{generate_key_pair, hybrid_decrypt, hybrid_encrypt};
//!
//! let pair = generate_key_pair()?;
//!
//! let plaintext = br#"{"uid":1001,"scope":"admin"}"#;
//! let envelope = hybrid_encrypt(pair.public_key(), plaintext)?;
//!
//! let decrypted = hybrid_decrypt(pair.private_key(), &envelope)?;
//! assert_eq!(decrypted, plaintext);
//! # Ok::<(), hybrid_envelope::EnvelopeError>(())
//! ```
//!
//! # Formats
//!
//! | Item | Encoding |
//! |------|----------|
//! | Public key | `base64(SubjectPublicKeyInfo DER)` |
//! | Private key | `base64(PKCS#1 RSAPrivateKey DER)` |
//! | Envelope | `base64url_nopad(u32_be(L) \|\| wrapped_key[L] \|\| nonce[12] \|\| ciphertext \|\| tag[16])` |
//!
//! The wrapped key is RSA-OAEP with SHA-256 (MGF1-SHA-256, empty label);
//! the payload is AES-256-GCM with no associated data.
//!
//! # Randomness
//!
//! Every operation that needs randomness has a `*_with_rng` variant taking
//! any [`rand_core::CryptoRngCore`]. The plain variants use `OsRng`.
//!
//! # Security
//!
//! - Session keys are zeroized on drop and never reused
//! - Debug output redacts private key material
//! - Open-path failures share one error message
//! - Private-key operations are blinded
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{EnvelopeError, EnvelopeResult};
pub use core::operations::hybrid::{
    hybrid_decrypt, hybrid_decrypt_with_rng, hybrid_encrypt, hybrid_encrypt_with_rng,
};
pub use core::types::{
    decode_private, decode_public, generate_key_pair, generate_key_pair_with_rng, EncodedKeyPair,
    Envelope, EnvelopePrivateKey, EnvelopePublicKey,
};
