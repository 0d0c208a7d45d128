//! Environment abstraction for deterministic testing.
//!
//! Decouples the engines from the process-wide random source. Production code
//! uses [`crate::SystemEnv`] (OS entropy); tests use seeded or deliberately
//! failing environments.

use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;

/// Abstract environment providing cryptographic randomness.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - `rng()` returns a cryptographically secure generator in production,
///   never a statistical PRNG
/// - Generators handed out by clones of the same environment never replay
///   each other's output (nonce uniqueness depends on it)
/// - The environment is safe to share between threads
pub trait Environment: Clone + Send + Sync + 'static {
    /// Generator type handed out per operation.
    type Rng: RngCore + CryptoRng;

    /// Returns a generator for a single operation.
    ///
    /// Each engine call takes its own generator, so concurrent callers never
    /// contend on shared state.
    fn rng(&self) -> Self::Rng;

    /// Fills the provided buffer with random bytes.
    ///
    /// # Errors
    ///
    /// - `RandomSource`: the underlying generator could not produce bytes.
    ///   The buffer contents are unspecified and must be discarded.
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), CryptoError> {
        self.rng()
            .try_fill_bytes(buffer)
            .map_err(|err| CryptoError::RandomSource { reason: err.to_string() })
    }
}
