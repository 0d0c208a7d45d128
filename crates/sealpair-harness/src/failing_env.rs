//! Environment whose random source is always unavailable.

use rand::{CryptoRng, RngCore};
use sealpair_crypto::Environment;

/// Error message reported by [`FailingRng`].
const UNAVAILABLE: &str = "entropy source unavailable";

/// Environment simulating an exhausted or broken OS random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingEnv;

impl Environment for FailingEnv {
    type Rng = FailingRng;

    fn rng(&self) -> Self::Rng {
        FailingRng
    }
}

/// Generator that fails every fallible read.
///
/// Infallible reads panic. The engines only read through
/// `Environment::random_bytes`, so a panic here means some path bypassed it.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingRng;

#[allow(clippy::panic)]
impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("{UNAVAILABLE}: infallible read from FailingRng");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("{UNAVAILABLE}: infallible read from FailingRng");
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("{UNAVAILABLE}: infallible read from FailingRng");
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(UNAVAILABLE))
    }
}

impl CryptoRng for FailingRng {}
