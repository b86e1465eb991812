//! Ergonomic imports for envelope operations.
//!
//! ```rust
//! use hybrid_envelope::prelude::*;
//! ```

pub mod builders;

pub use builders::KeyPairBuilder;

pub use crate::core::error::{EnvelopeError, EnvelopeResult};
pub use crate::core::operations::hybrid::{
    hybrid_decrypt, hybrid_decrypt_with_rng, hybrid_encrypt, hybrid_encrypt_with_rng,
};
pub use crate::core::types::{
    decode_private, decode_public, generate_key_pair, generate_key_pair_with_rng, EncodedKeyPair,
    Envelope, EnvelopePrivateKey, EnvelopePublicKey,
};
