//! Envelope type implementations.
//!
//! This module provides the types that flow through sealing and opening:
//!
//! - [`EnvelopePublicKey`] - Recipient public key (`base64(SPKI DER)`)
//! - [`EnvelopePrivateKey`] - Recipient private key (`base64(PKCS#1 DER)`)
//! - [`EncodedKeyPair`] - Freshly generated pair in text form
//! - [`SessionKey`] - One-time AES-256 key
//! - [`Envelope`] - The sealed message (`base64url(len || wrapped || nonce || ct)`)

mod envelope;
mod key_pair;
mod private;
mod public;
mod session_key;

pub use envelope::{decode, encode, Envelope, LENGTH_PREFIX_SIZE};
pub use key_pair::{
    decode_private, decode_public, generate_key_pair, generate_key_pair_with_rng,
    EncodedKeyPair, DEFAULT_MODULUS_BITS, MAX_MODULUS_BITS, MIN_MODULUS_BITS,
};
pub use private::EnvelopePrivateKey;
pub use public::EnvelopePublicKey;
pub use session_key::{SessionKey, SESSION_KEY_SIZE};
