//! Fuzz target for AES-256-GCM sealing and opening
//!
//! # Strategy
//!
//! - Arbitrary keys and ciphertexts fed straight to decrypt
//! - Seeded encryptions of arbitrary plaintexts
//! - Single bit flips anywhere in a valid ciphertext
//!
//! # Invariants
//!
//! - Decrypt never panics
//! - Inputs shorter than a nonce are MalformedInput
//! - Anything else that fails is AuthenticationFailed
//! - Seeded encryption round-trips
//! - A flipped bit is always detected

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealpair_crypto::{CryptoError, SymmetricEngine, SymmetricKey, NONCE_SIZE, TAG_SIZE};
use sealpair_harness::SeededEnv;

#[derive(Debug, Arbitrary)]
struct Scenario {
    /// Key used against the raw ciphertext
    key: [u8; 32],
    /// Attacker-controlled input
    ciphertext: Vec<u8>,
    /// Message sealed under a seeded environment
    plaintext: Vec<u8>,
    /// Seed for the environment
    seed: u64,
    /// Bit to flip in the sealed message
    flip: u16,
}

fuzz_target!(|scenario: Scenario| {
    let engine = SymmetricEngine::new(SeededEnv::new(scenario.seed));

    let key = SymmetricKey::from_bytes(scenario.key);
    match engine.decrypt(&scenario.ciphertext, &key) {
        Ok(_) => panic!("forged ciphertext accepted"),
        Err(CryptoError::MalformedInput { .. }) => assert!(scenario.ciphertext.len() < NONCE_SIZE),
        Err(CryptoError::AuthenticationFailed) => assert!(scenario.ciphertext.len() >= NONCE_SIZE),
        Err(other) => panic!("unexpected error: {other:?}"),
    }

    let sealed = engine.encrypt(&scenario.plaintext).expect("seeded encryption failed");
    assert_eq!(sealed.ciphertext.len(), NONCE_SIZE + scenario.plaintext.len() + TAG_SIZE);

    let opened = engine.decrypt(&sealed.ciphertext, &sealed.key).expect("round trip failed");
    assert_eq!(opened, scenario.plaintext);

    let mut tampered = sealed.ciphertext.clone();
    let bit = usize::from(scenario.flip) % (tampered.len() * 8);
    tampered[bit / 8] ^= 1 << (bit % 8);
    assert_eq!(engine.decrypt(&tampered, &sealed.key), Err(CryptoError::AuthenticationFailed));
});
