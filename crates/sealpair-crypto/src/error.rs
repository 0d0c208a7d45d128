//! Error types for the encryption engines

use thiserror::Error;

/// Errors from symmetric and asymmetric engine operations.
///
/// No operation retries internally, and no failing operation returns partial
/// output: a ciphertext, key or key pair is either complete or absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Secure randomness was unavailable
    #[error("random source failure: {reason}")]
    RandomSource {
        /// Error reported by the generator
        reason: String,
    },

    /// Caller-supplied ciphertext is structurally invalid
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What is wrong with the input
        reason: &'static str,
    },

    /// AEAD tag mismatch: wrong key, tampered or corrupted ciphertext
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Plaintext exceeds what the cipher can seal in one operation
    #[error("plaintext too large: {actual} bytes, maximum is {max}")]
    PlaintextTooLarge {
        /// Largest accepted plaintext length
        max: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Asymmetric decryption or padding check failed
    ///
    /// Deliberately carries no detail so that padding failures and key
    /// mismatches are indistinguishable.
    #[error("decryption failed")]
    DecryptionFailed,

    /// Invalid key material length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length
        expected: usize,
        /// Actual key length
        actual: usize,
    },

    /// Key pair construction failed
    #[error("key generation failed: {reason}")]
    KeyGeneration {
        /// Error reported by the RSA implementation
        reason: String,
    },

    /// Asymmetric encryption failed for a reason other than input size
    #[error("encryption failed: {reason}")]
    EncryptionFailed {
        /// Error reported by the RSA implementation
        reason: String,
    },
}

impl CryptoError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors mean the engine cannot operate securely in this process.
    /// Non-fatal errors reject one specific input; retrying the same input is
    /// pointless, but other inputs may still succeed.
    pub fn is_fatal(&self) -> bool {
        match self {
            // Environment or primitive failures - fatal
            Self::RandomSource { .. } => true,
            Self::KeyGeneration { .. } => true,
            Self::EncryptionFailed { .. } => true,

            // Rejected input - caller's problem
            Self::MalformedInput { .. } => false,
            Self::AuthenticationFailed => false,
            Self::PlaintextTooLarge { .. } => false,
            Self::DecryptionFailed => false,
            Self::InvalidKeyLength { .. } => false,
        }
    }
}
