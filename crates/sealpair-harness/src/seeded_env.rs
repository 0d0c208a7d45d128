//! Seeded Environment implementation for deterministic testing.
//!
//! `SeededEnv` replaces OS entropy with ChaCha20 keyed from a `u64` seed.
//! Every call to `rng()` opens the next ChaCha stream, so two operations never
//! see the same bytes, while two environments built from the same seed replay
//! the exact same sequence.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sealpair_crypto::Environment;

/// Deterministic environment backed by ChaCha20.
///
/// Clones share the stream counter, so handing a clone to another engine or
/// thread keeps nonces unique across all of them.
///
/// # Determinism
///
/// Output depends on the seed and on the order in which generators are
/// requested. Single-threaded test code is fully reproducible; concurrent
/// callers get unique but interleaving-dependent streams.
#[derive(Clone, Debug)]
pub struct SeededEnv {
    seed: u64,
    next_stream: Arc<AtomicU64>,
}

impl SeededEnv {
    /// Create an environment replaying the sequence for `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed, next_stream: Arc::new(AtomicU64::new(0)) }
    }

    /// The seed this environment was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of generators handed out so far (across all clones).
    pub fn streams_used(&self) -> u64 {
        self.next_stream.load(Ordering::Relaxed)
    }
}

impl Environment for SeededEnv {
    type Rng = ChaCha20Rng;

    fn rng(&self) -> Self::Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        rng.set_stream(self.next_stream.fetch_add(1, Ordering::Relaxed));
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_bytes() {
        let env1 = SeededEnv::new(42);
        let env2 = SeededEnv::new(42);

        for _ in 0..4 {
            let mut bytes1 = [0u8; 32];
            let mut bytes2 = [0u8; 32];
            env1.random_bytes(&mut bytes1).unwrap();
            env2.random_bytes(&mut bytes2).unwrap();
            assert_eq!(bytes1, bytes2);
        }
    }

    #[test]
    fn different_seeds_different_bytes() {
        let mut bytes1 = [0u8; 32];
        let mut bytes2 = [0u8; 32];

        SeededEnv::new(1).random_bytes(&mut bytes1).unwrap();
        SeededEnv::new(2).random_bytes(&mut bytes2).unwrap();

        assert_ne!(bytes1, bytes2);
    }

    #[test]
    fn successive_generators_do_not_repeat() {
        let env = SeededEnv::new(7);

        let mut bytes1 = [0u8; 32];
        let mut bytes2 = [0u8; 32];
        env.random_bytes(&mut bytes1).unwrap();
        env.random_bytes(&mut bytes2).unwrap();

        assert_ne!(bytes1, bytes2);
        assert_eq!(env.streams_used(), 2);
    }

    #[test]
    fn clones_share_stream_counter() {
        let env = SeededEnv::new(7);
        let clone = env.clone();

        let mut bytes1 = [0u8; 32];
        let mut bytes2 = [0u8; 32];
        env.random_bytes(&mut bytes1).unwrap();
        clone.random_bytes(&mut bytes2).unwrap();

        assert_ne!(bytes1, bytes2, "clones must not replay each other");
        assert_eq!(env.streams_used(), 2);
        assert_eq!(clone.seed(), 7);
    }
}
