//! Production Environment implementation using the OS random generator.
//!
//! `SystemEnv` is the production implementation of the Environment trait. It
//! hands out [`OsRng`], which reads directly from the operating system's
//! CSPRNG (getrandom on Linux, `BCryptGenRandom` on Windows). Output is not
//! reproducible.

#![allow(clippy::disallowed_types)]

use rand::rngs::OsRng;

use crate::env::Environment;

/// Production environment backed by OS entropy.
///
/// # Security
///
/// `OsRng` is stateless and thread-safe; every call reads fresh bytes from
/// the kernel. Suitable for keys, nonces and RSA blinding factors.
///
/// Both engines read through [`Environment::random_bytes`], which uses
/// `try_fill_bytes`, so an OS failure surfaces as
/// [`crate::CryptoError::RandomSource`]. The RSA engine only touches the OS
/// to seed its per-operation generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Rng = OsRng;

    fn rng(&self) -> Self::Rng {
        OsRng
    }
}
