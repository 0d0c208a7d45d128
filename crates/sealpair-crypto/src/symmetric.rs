//! Authenticated symmetric encryption using AES-256-GCM
//!
//! Every call to [`SymmetricEngine::encrypt`] draws a fresh key and nonce, so
//! a (key, nonce) pair is never reused. The nonce travels as a ciphertext
//! prefix:
//!
//! ```text
//! ┌──────────────┬───────────────────────────┬──────────────┐
//! │ nonce (12 B) │ sealed plaintext (len B)  │ tag (16 B)   │
//! └──────────────┴───────────────────────────┴──────────────┘
//! ```

use std::fmt;

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroize;

use crate::{env::Environment, error::CryptoError};

/// AES-256 key size (32 bytes)
pub const KEY_SIZE: usize = 32;

/// AES-GCM nonce size (12 bytes)
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// GCM plaintext limit under a single nonce: 2^36 - 32 bytes
const GCM_MAX_PLAINTEXT: u64 = (1 << 36) - 32;

/// A 256-bit AES key.
///
/// Key bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Draw a fresh key from the environment's random source.
    pub fn generate<E: Environment>(env: &E) -> Result<Self, CryptoError> {
        let mut key = Self { bytes: [0u8; KEY_SIZE] };
        env.random_bytes(&mut key.bytes)?;
        Ok(key)
    }

    /// Wrap existing key bytes, e.g. a key received out of band.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Raw key bytes. Treat as secret.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for SymmetricKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

// Implement Drop to zeroize key material
impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Output of a symmetric encryption: the framed ciphertext and its key.
///
/// The key is returned alongside the ciphertext because nothing else can
/// decrypt it. Transport it over a different channel than the ciphertext.
#[derive(Debug, Clone)]
pub struct SealedMessage {
    /// `nonce || sealed plaintext || tag`
    pub ciphertext: Vec<u8>,
    /// The freshly generated key the ciphertext was sealed under
    pub key: SymmetricKey,
}

impl SealedMessage {
    /// The nonce prefix of the ciphertext.
    pub fn nonce(&self) -> &[u8] {
        self.ciphertext.get(..NONCE_SIZE).unwrap_or_default()
    }

    /// Plaintext length (ciphertext length minus nonce and tag).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(NONCE_SIZE + TAG_SIZE)
    }

    /// Split into ciphertext and key.
    pub fn into_parts(self) -> (Vec<u8>, SymmetricKey) {
        (self.ciphertext, self.key)
    }
}

/// Stateless AES-256-GCM engine.
///
/// Holds only the environment used for key and nonce generation; safe to
/// clone and share between threads.
#[derive(Debug, Clone, Default)]
pub struct SymmetricEngine<E> {
    env: E,
}

impl<E: Environment> SymmetricEngine<E> {
    /// Create an engine drawing randomness from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Encrypt `plaintext` under a freshly generated key.
    ///
    /// # Errors
    ///
    /// - `RandomSource`: key or nonce could not be generated. Nothing is
    ///   returned; there is no fallback to a weaker source.
    /// - `PlaintextTooLarge`: beyond the GCM single-nonce limit
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<SealedMessage, CryptoError> {
        let key = SymmetricKey::generate(&self.env)?;

        let mut nonce = [0u8; NONCE_SIZE];
        self.env.random_bytes(&mut nonce)?;

        let ciphertext = seal(&key, &nonce, plaintext)?;

        tracing::debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "sealed symmetric payload"
        );

        Ok(SealedMessage { ciphertext, key })
    }

    /// Decrypt a `nonce || sealed || tag` ciphertext.
    ///
    /// Returns the exact original plaintext, or nothing.
    ///
    /// # Errors
    ///
    /// - `MalformedInput`: shorter than the nonce; the cipher is not invoked
    /// - `AuthenticationFailed`: wrong key, tampered or truncated ciphertext
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &SymmetricKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let result = open(ciphertext, key);

        match &result {
            Ok(plaintext) => {
                tracing::debug!(plaintext_len = plaintext.len(), "opened symmetric payload");
            },
            Err(err) => tracing::debug!(error = %err, "symmetric decryption rejected"),
        }

        result
    }
}

/// Seal `plaintext` and prepend the nonce.
fn seal(
    key: &SymmetricKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    // The only failure mode of GCM sealing is exceeding its length limit
    let sealed = cipher.encrypt(Nonce::from_slice(nonce), plaintext).map_err(|_| {
        CryptoError::PlaintextTooLarge {
            max: usize::try_from(GCM_MAX_PLAINTEXT).unwrap_or(usize::MAX),
            actual: plaintext.len(),
        }
    })?;

    let mut ciphertext = Vec::with_capacity(NONCE_SIZE + sealed.len());
    ciphertext.extend_from_slice(nonce);
    ciphertext.extend_from_slice(&sealed);
    Ok(ciphertext)
}

/// Split off the nonce and open the remainder.
fn open(ciphertext: &[u8], key: &SymmetricKey) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.len() < NONCE_SIZE {
        return Err(CryptoError::MalformedInput { reason: "ciphertext too short" });
    }

    let (nonce, sealed) = ciphertext.split_at(NONCE_SIZE);
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    cipher.decrypt(Nonce::from_slice(nonce), sealed).map_err(|_| CryptoError::AuthenticationFailed)
}
