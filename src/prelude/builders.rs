//! Builder for key pair generation.
//!
//! # Modulus Profiles
//!
//! | Profile | Modulus | Wrapped key | Use Case |
//! |---------|---------|-------------|----------|
//! | `standard()` | 2048 bits | 256 bytes | Interoperable default |
//! | `strong()` | 3072 bits | 384 bytes | Keys expected to live for years |
//! | `maximum()` | 4096 bits | 512 bytes | Largest size whose public key still decodes |
//!
//! # Example
//!
//! ```rust,no_run
//! use hybrid_envelope::prelude::*;
//!
//! let pair = KeyPairBuilder::strong()
//!     .try_generate()
//!     .expect("generation should succeed");
//!
//! let envelope = hybrid_encrypt(pair.public_key(), b"payload")
//!     .expect("encryption should succeed");
//! ```

use rand_core::{CryptoRngCore, OsRng};

use crate::core::error::EnvelopeResult;
use crate::core::types::{
    generate_key_pair_with_rng, EncodedKeyPair, DEFAULT_MODULUS_BITS, MAX_MODULUS_BITS,
    MIN_MODULUS_BITS,
};

/// Builder for RSA key pairs.
///
/// # Example
///
/// ```rust
/// use hybrid_envelope::prelude::*;
///
/// let builder = KeyPairBuilder::new();
/// assert_eq!(builder.get_modulus_bits(), 2048);
///
/// let builder = KeyPairBuilder::maximum();
/// assert_eq!(builder.get_wrapped_key_size(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPairBuilder {
    modulus_bits: usize,
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyPairBuilder {
    /// Creates a new builder with the standard (2048-bit) profile.
    #[must_use]
    pub const fn new() -> Self {
        Self::standard()
    }

    /// Standard profile: 2048-bit modulus.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            modulus_bits: DEFAULT_MODULUS_BITS,
        }
    }

    /// Strong profile: 3072-bit modulus.
    #[must_use]
    pub const fn strong() -> Self {
        Self { modulus_bits: 3072 }
    }

    /// Maximum profile: 4096-bit modulus.
    #[must_use]
    pub const fn maximum() -> Self {
        Self {
            modulus_bits: MAX_MODULUS_BITS,
        }
    }

    /// Sets the modulus size in bits.
    ///
    /// Values outside [`MIN_MODULUS_BITS`]..=[`MAX_MODULUS_BITS`] are
    /// rejected at generation time.
    #[must_use]
    pub const fn modulus_bits(mut self, modulus_bits: usize) -> Self {
        self.modulus_bits = modulus_bits;
        self
    }

    /// Returns the configured modulus size in bits.
    #[must_use]
    pub const fn get_modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    /// Returns the wrapped-key length envelopes sealed to this size will have.
    #[must_use]
    pub const fn get_wrapped_key_size(&self) -> usize {
        self.modulus_bits.div_ceil(8)
    }

    /// Returns `true` if the configured size is within the accepted range.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.modulus_bits >= MIN_MODULUS_BITS && self.modulus_bits <= MAX_MODULUS_BITS
    }

    /// Generates a key pair using the operating system generator.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyGeneration` if the size is rejected or
    /// the generator fails.
    pub fn try_generate(&self) -> EnvelopeResult<EncodedKeyPair> {
        self.try_generate_with_rng(&mut OsRng)
    }

    /// Generates a key pair from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyGeneration` if the size is rejected or
    /// `rng` fails.
    pub fn try_generate_with_rng<R: CryptoRngCore>(
        &self,
        rng: &mut R,
    ) -> EnvelopeResult<EncodedKeyPair> {
        generate_key_pair_with_rng(rng, self.modulus_bits)
    }
}
