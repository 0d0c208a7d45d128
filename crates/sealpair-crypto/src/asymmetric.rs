//! Public-key encryption using RSA-2048 with OAEP/SHA-256 padding
//!
//! Single-block only: a plaintext must fit in one padded block of the modulus
//! size. There is no chunking and no hybrid fallback for larger payloads.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey, traits::PublicKeyParts};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{env::Environment, error::CryptoError};

/// RSA modulus size in bits
pub const RSA_KEY_BITS: usize = 2048;

/// SHA-256 output size used by OAEP (32 bytes)
pub const OAEP_HASH_SIZE: usize = 32;

/// Largest OAEP plaintext for a modulus of `modulus_bytes` bytes.
///
/// `k - 2 * hLen - 2`, i.e. 190 bytes for RSA-2048 with SHA-256.
pub const fn max_plaintext_len(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(2 * OAEP_HASH_SIZE + 2)
}

/// RSA public key. Freely shareable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    /// Modulus size in bytes (also the ciphertext size).
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Largest plaintext this key can encrypt.
    pub fn max_plaintext_len(&self) -> usize {
        max_plaintext_len(self.size())
    }

    /// The underlying `rsa` key, for encoding into exchange formats.
    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self(key)
    }
}

/// RSA private key. Must never leave its owner.
///
/// The underlying key material is zeroized on drop; `Debug` only shows the
/// modulus size.
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);

impl PrivateKey {
    /// Modulus size in bytes.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").field("bits", &(self.size() * 8)).finish_non_exhaustive()
    }
}

/// A private key and the public key derived from it.
#[derive(Debug, Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// The private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Split into (private, public).
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}

/// Stateless RSA-OAEP engine.
///
/// The environment supplies key generation randomness, OAEP seeds and RSA
/// blinding factors. The `rsa` primitives only read infallibly, so each
/// operation first draws a 32-byte seed through
/// [`Environment::random_bytes`] and runs on ChaCha20 keyed from it. A broken
/// source is reported as [`CryptoError::RandomSource`] before any RSA work.
#[derive(Debug, Clone, Default)]
pub struct AsymmetricEngine<E> {
    env: E,
}

impl<E: Environment> AsymmetricEngine<E> {
    /// Create an engine drawing randomness from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Generate a fresh RSA-2048 key pair (public exponent 65537).
    ///
    /// # Errors
    ///
    /// - `RandomSource`: the environment could not seed the operation
    /// - `KeyGeneration`: the RSA implementation could not build a key
    pub fn generate_key_pair(&self) -> Result<KeyPair, CryptoError> {
        let mut rng = self.operation_rng()?;

        let private = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)
            .map_err(|err| CryptoError::KeyGeneration { reason: err.to_string() })?;
        let public = PublicKey(private.to_public_key());

        tracing::debug!(bits = RSA_KEY_BITS, "generated RSA key pair");

        Ok(KeyPair { private: PrivateKey(private), public })
    }

    /// Encrypt one block under `public_key` with OAEP/SHA-256, no label.
    ///
    /// # Errors
    ///
    /// - `PlaintextTooLarge`: longer than [`PublicKey::max_plaintext_len`],
    ///   checked before any randomness is drawn
    /// - `RandomSource`: the environment could not seed the operation
    /// - `EncryptionFailed`: any other failure of the RSA primitive
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        public_key: &PublicKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let max = public_key.max_plaintext_len();
        if plaintext.len() > max {
            tracing::debug!(plaintext_len = plaintext.len(), max, "asymmetric plaintext too large");
            return Err(CryptoError::PlaintextTooLarge { max, actual: plaintext.len() });
        }

        let mut rng = self.operation_rng()?;
        let ciphertext =
            public_key.0.encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext).map_err(|err| {
                match err {
                    rsa::Error::MessageTooLong => {
                        CryptoError::PlaintextTooLarge { max, actual: plaintext.len() }
                    },
                    other => CryptoError::EncryptionFailed { reason: other.to_string() },
                }
            })?;

        tracing::debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted asymmetric block"
        );

        Ok(ciphertext)
    }

    /// Decrypt one OAEP block with `private_key`, using RSA blinding.
    ///
    /// # Errors
    ///
    /// - `RandomSource`: the environment could not seed the blinding factor
    /// - `DecryptionFailed`: for every other failure. Wrong key, bad padding
    ///   and wrong length are not distinguished.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        private_key: &PrivateKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let mut rng = self.operation_rng()?;

        let plaintext = private_key
            .0
            .decrypt_blinded(&mut rng, Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| {
                tracing::debug!(
                    ciphertext_len = ciphertext.len(),
                    "asymmetric decryption rejected"
                );
                CryptoError::DecryptionFailed
            })?;

        tracing::debug!(plaintext_len = plaintext.len(), "decrypted asymmetric block");

        Ok(plaintext)
    }

    /// Generator for a single RSA operation, seeded from the environment.
    fn operation_rng(&self) -> Result<ChaCha20Rng, CryptoError> {
        let mut seed = [0u8; 32];
        self.env.random_bytes(&mut seed)?;

        let rng = ChaCha20Rng::from_seed(seed);
        seed.zeroize();
        Ok(rng)
    }
}
