//! Shared RSA key pairs, generated once per test binary.

use std::sync::OnceLock;

use sealpair_crypto::{AsymmetricEngine, KeyPair};

use crate::SeededEnv;

/// Seed behind [`shared_key_pair`].
pub const SHARED_KEY_SEED: u64 = 0x5EA1_0001;

/// Seed behind [`unrelated_key_pair`].
pub const UNRELATED_KEY_SEED: u64 = 0x5EA1_0002;

/// The key pair most tests encrypt to.
pub fn shared_key_pair() -> &'static KeyPair {
    static KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
    KEY_PAIR.get_or_init(|| generate(SHARED_KEY_SEED))
}

/// A second key pair with no relation to [`shared_key_pair`].
pub fn unrelated_key_pair() -> &'static KeyPair {
    static KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
    KEY_PAIR.get_or_init(|| generate(UNRELATED_KEY_SEED))
}

#[allow(clippy::expect_used)]
fn generate(seed: u64) -> KeyPair {
    AsymmetricEngine::new(SeededEnv::new(seed))
        .generate_key_pair()
        .expect("invariant: key generation from a seeded ChaCha20 source cannot fail")
}
