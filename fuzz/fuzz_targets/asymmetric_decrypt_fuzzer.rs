//! Fuzz target for RSA-OAEP decryption
//!
//! # Strategy
//!
//! - Arbitrary byte strings of any length as ciphertext
//! - Real ciphertexts with arbitrary byte overwrites
//!
//! # Invariants
//!
//! - Decrypt never panics
//! - Every failure is the uniform DecryptionFailed
//! - Untouched ciphertexts always decrypt

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealpair_crypto::{AsymmetricEngine, CryptoError};
use sealpair_harness::{shared_key_pair, SeededEnv};

#[derive(Debug, Arbitrary)]
struct Scenario {
    /// Raw input to decrypt
    ciphertext: Vec<u8>,
    /// Message encrypted to the fixture key
    plaintext: [u8; 32],
    /// Byte overwrites applied to the real ciphertext
    edits: Vec<(u8, u8)>,
    /// Seed for the environment
    seed: u64,
}

fuzz_target!(|scenario: Scenario| {
    let engine = AsymmetricEngine::new(SeededEnv::new(scenario.seed));
    let pair = shared_key_pair();

    if let Err(err) = engine.decrypt(&scenario.ciphertext, pair.private_key()) {
        assert_eq!(err, CryptoError::DecryptionFailed);
    }

    let mut ciphertext =
        engine.encrypt(&scenario.plaintext, pair.public_key()).expect("encryption failed");

    if scenario.edits.is_empty() {
        let decrypted = engine.decrypt(&ciphertext, pair.private_key()).expect("round trip failed");
        assert_eq!(decrypted, scenario.plaintext);
        return;
    }

    for (position, value) in &scenario.edits {
        ciphertext[usize::from(*position)] = *value;
    }
    if let Err(err) = engine.decrypt(&ciphertext, pair.private_key()) {
        assert_eq!(err, CryptoError::DecryptionFailed);
    }
});
