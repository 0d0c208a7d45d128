//! Sealpair Cryptographic Engines
//!
//! Two independent confidentiality primitives behind small stateless service
//! objects. Randomness is never taken from a hidden global: every engine is
//! constructed with an [`Environment`] that hands out a cryptographically
//! secure generator per operation, so tests can substitute a seeded source.
//!
//! # Shared Secret vs. Key Pair
//!
//! ```text
//! SymmetricEngine::encrypt(plaintext)
//!        │  fresh 256-bit key + 96-bit nonce
//!        ▼
//! AES-256-GCM → nonce || sealed || tag  (+ key, returned to caller)
//!
//! AsymmetricEngine::generate_key_pair()
//!        │  RSA-2048
//!        ▼
//! PublicKey ──encrypt (OAEP/SHA-256)──▶ one block ──decrypt──▶ PrivateKey
//! ```
//!
//! # Security
//!
//! Symmetric:
//! - Key and nonce are drawn fresh for every call, so a nonce is never reused
//!   under the same key
//! - Any modified byte (nonce included) fails authentication; no plaintext is
//!   released on failure
//! - Keys are zeroized on drop
//!
//! Asymmetric:
//! - OAEP with SHA-256 and no label
//! - Plaintext is limited to a single block (190 bytes for RSA-2048); larger
//!   inputs are rejected rather than truncated or chunked
//! - Decryption failures carry no detail, so padding errors and key mismatches
//!   look the same to a caller

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod asymmetric;
pub mod env;
pub mod error;
pub mod symmetric;
mod system_env;

pub use asymmetric::{
    AsymmetricEngine, KeyPair, OAEP_HASH_SIZE, PrivateKey, PublicKey, RSA_KEY_BITS,
    max_plaintext_len,
};
pub use env::Environment;
pub use error::CryptoError;
pub use symmetric::{KEY_SIZE, NONCE_SIZE, SealedMessage, SymmetricEngine, SymmetricKey, TAG_SIZE};
pub use system_env::SystemEnv;
