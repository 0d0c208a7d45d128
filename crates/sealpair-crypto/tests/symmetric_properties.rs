//! Property-based tests for the symmetric engine
//!
//! These tests verify the invariants of AES-256-GCM sealing:
//!
//! 1. **Round-trip**: decrypt(encrypt(m)) == m for all messages
//! 2. **Tamper detection**: any single flipped bit fails authentication
//! 3. **Key independence**: keys and nonces never repeat across calls
//! 4. **Cross-key failure**: a different key never opens the ciphertext
//! 5. **Fail closed**: no output on random source failure or short input

use std::collections::HashSet;

use proptest::prelude::*;
use sealpair_crypto::{
    CryptoError, KEY_SIZE, NONCE_SIZE, SymmetricEngine, SymmetricKey, SystemEnv, TAG_SIZE,
};
use sealpair_harness::{FailingEnv, SeededEnv};

const MESSAGE: &[u8] = b"This is a secret message that needs to be protected.";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_encrypt_decrypt_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        seed in any::<u64>(),
    ) {
        let engine = SymmetricEngine::new(SeededEnv::new(seed));

        let sealed = engine.encrypt(&plaintext).unwrap();
        let decrypted = engine.decrypt(&sealed.ciphertext, &sealed.key).unwrap();

        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn prop_ciphertext_length_is_nonce_plus_plaintext_plus_tag(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
    ) {
        let engine = SymmetricEngine::new(SystemEnv::new());

        let sealed = engine.encrypt(&plaintext).unwrap();

        prop_assert_eq!(sealed.ciphertext.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE);
        prop_assert_eq!(sealed.plaintext_len(), plaintext.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_single_bit_flip_fails_authentication(
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let engine = SymmetricEngine::new(SystemEnv::new());
        let sealed = engine.encrypt(&plaintext).unwrap();

        let mut tampered = sealed.ciphertext.clone();
        let index = position.index(tampered.len());
        tampered[index] ^= 1 << bit;

        let result = engine.decrypt(&tampered, &sealed.key);
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn prop_wrong_key_fails_authentication(
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        wrong_key in prop::array::uniform32(any::<u8>()),
    ) {
        let engine = SymmetricEngine::new(SystemEnv::new());
        let sealed = engine.encrypt(&plaintext).unwrap();
        prop_assume!(&wrong_key != sealed.key.as_bytes());

        let result = engine.decrypt(&sealed.ciphertext, &SymmetricKey::from_bytes(wrong_key));
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn prop_short_ciphertext_is_malformed(
        ciphertext in prop::collection::vec(any::<u8>(), 0..NONCE_SIZE),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let engine = SymmetricEngine::new(SystemEnv::new());

        let result = engine.decrypt(&ciphertext, &SymmetricKey::from_bytes(key));
        prop_assert_eq!(
            result,
            Err(CryptoError::MalformedInput { reason: "ciphertext too short" })
        );
    }
}

#[test]
fn every_bit_flip_of_example_message_is_detected() {
    let engine = SymmetricEngine::new(SystemEnv::new());
    let sealed = engine.encrypt(MESSAGE).unwrap();

    for index in 0..sealed.ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = sealed.ciphertext.clone();
            tampered[index] ^= 1 << bit;

            let result = engine.decrypt(&tampered, &sealed.key);
            assert_eq!(
                result,
                Err(CryptoError::AuthenticationFailed),
                "flip of bit {bit} in byte {index} went undetected"
            );
        }
    }
}

#[test]
fn example_message_scenario() {
    let engine = SymmetricEngine::new(SystemEnv::new());

    let sealed = engine.encrypt(MESSAGE).unwrap();
    assert_eq!(sealed.ciphertext.len(), 12 + MESSAGE.len() + 16);
    assert_eq!(sealed.nonce().len(), 12);
    assert_eq!(sealed.key.as_bytes().len(), KEY_SIZE);

    let decrypted = engine.decrypt(&sealed.ciphertext, &sealed.key).unwrap();
    assert_eq!(decrypted, MESSAGE);
}

#[test]
fn keys_and_nonces_are_pairwise_distinct() {
    let engine = SymmetricEngine::new(SystemEnv::new());

    let mut keys = HashSet::new();
    let mut nonces = HashSet::new();

    for _ in 0..1000 {
        let sealed = engine.encrypt(MESSAGE).unwrap();
        assert!(keys.insert(*sealed.key.as_bytes()), "key repeated");
        assert!(nonces.insert(sealed.nonce().to_vec()), "nonce repeated");
    }
}

#[test]
fn seeded_engine_keys_and_nonces_are_pairwise_distinct() {
    let engine = SymmetricEngine::new(SeededEnv::new(0));

    let mut keys = HashSet::new();
    let mut nonces = HashSet::new();

    for _ in 0..1000 {
        let sealed = engine.encrypt(MESSAGE).unwrap();
        assert!(keys.insert(*sealed.key.as_bytes()), "key repeated");
        assert!(nonces.insert(sealed.nonce().to_vec()), "nonce repeated");
    }
}

#[test]
fn same_seed_reproduces_ciphertext_and_key() {
    let first = SymmetricEngine::new(SeededEnv::new(99)).encrypt(MESSAGE).unwrap();
    let second = SymmetricEngine::new(SeededEnv::new(99)).encrypt(MESSAGE).unwrap();

    assert_eq!(first.ciphertext, second.ciphertext);
    assert_eq!(first.key.as_bytes(), second.key.as_bytes());
}

#[test]
fn random_source_failure_aborts_encryption() {
    let engine = SymmetricEngine::new(FailingEnv);

    let result = engine.encrypt(MESSAGE);

    match result {
        Err(err @ CryptoError::RandomSource { .. }) => assert!(err.is_fatal()),
        other => unreachable!("expected RandomSource error, got {other:?}"),
    }
}

#[test]
fn decryption_needs_no_randomness() {
    let sealed = SymmetricEngine::new(SystemEnv::new()).encrypt(MESSAGE).unwrap();

    let decrypted = SymmetricEngine::new(FailingEnv).decrypt(&sealed.ciphertext, &sealed.key);
    assert_eq!(decrypted.unwrap(), MESSAGE);
}

#[test]
fn truncated_tag_fails_authentication() {
    let engine = SymmetricEngine::new(SystemEnv::new());
    let sealed = engine.encrypt(MESSAGE).unwrap();

    let truncated = &sealed.ciphertext[..sealed.ciphertext.len() - 1];
    assert_eq!(engine.decrypt(truncated, &sealed.key), Err(CryptoError::AuthenticationFailed));
}

#[test]
fn appended_bytes_fail_authentication() {
    let engine = SymmetricEngine::new(SystemEnv::new());
    let sealed = engine.encrypt(MESSAGE).unwrap();

    let mut extended = sealed.ciphertext.clone();
    extended.push(0);
    assert_eq!(engine.decrypt(&extended, &sealed.key), Err(CryptoError::AuthenticationFailed));
}
