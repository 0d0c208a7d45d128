//! Demo error types.

use std::fmt;

use sealpair_crypto::CryptoError;
use thiserror::Error;

/// Step of the walkthrough that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Sealing the message under a fresh AES key
    SymmetricEncryption,
    /// Opening the sealed message again
    SymmetricDecryption,
    /// Generating the RSA key pair
    KeyGeneration,
    /// Encrypting the message to the public key
    AsymmetricEncryption,
    /// Decrypting with the private key
    AsymmetricDecryption,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SymmetricEncryption => "symmetric encryption",
            Self::SymmetricDecryption => "symmetric decryption",
            Self::KeyGeneration => "RSA key generation",
            Self::AsymmetricEncryption => "asymmetric encryption",
            Self::AsymmetricDecryption => "asymmetric decryption",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while running the walkthrough.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An engine operation failed.
    #[error("{stage} failed: {source}")]
    Stage {
        /// Step that failed
        stage: Stage,
        /// Error reported by the engine
        #[source]
        source: CryptoError,
    },

    /// The public key could not be encoded for display.
    #[error("public key encoding failed: {reason}")]
    Encoding {
        /// Error reported by the encoder
        reason: String,
    },

    /// Decryption succeeded but produced something other than the input.
    ///
    /// Should never happen with a correct engine. Indicates a bug.
    #[error("{stage} returned a different message")]
    RoundTripMismatch {
        /// Decryption step whose output differed
        stage: Stage,
    },

    /// Writing the report failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl DemoError {
    /// Builds a `map_err` adapter attributing a [`CryptoError`] to `stage`.
    pub(crate) fn at(stage: Stage) -> impl FnOnce(CryptoError) -> Self {
        move |source| Self::Stage { stage, source }
    }

    /// The engine error behind this failure, if any.
    pub fn crypto_error(&self) -> Option<&CryptoError> {
        match self {
            Self::Stage { source, .. } => Some(source),
            _ => None,
        }
    }
}
