//! Sealpair walkthrough.
//!
//! Runs one message through both engines of [`sealpair_crypto`] and collects
//! what happened into a [`DemoReport`]:
//!
//! ```text
//! message ──► SymmetricEngine::encrypt ──► nonce || ciphertext || tag
//!                                              │
//!         ◄── SymmetricEngine::decrypt ◄───────┘
//!
//! message ──► AsymmetricEngine::encrypt(public) ──► 256-byte OAEP block
//!                                                       │
//!         ◄── AsymmetricEngine::decrypt(private) ◄──────┘
//! ```
//!
//! The randomness source is injected, so [`run`] is deterministic under a
//! seeded environment. The `sealpair` binary drives it with
//! [`SystemEnv`](sealpair_crypto::SystemEnv).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod report;

use std::io::Write;

pub use config::{DEFAULT_MESSAGE, DemoConfig};
pub use error::{DemoError, Stage};
pub use report::{DemoReport, Preview};
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use sealpair_crypto::{AsymmetricEngine, Environment, SymmetricEngine};

/// Encrypt and decrypt `config.message` with both engines.
///
/// Stops at the first failing stage. A decryption that succeeds with a
/// different message is reported as [`DemoError::RoundTripMismatch`].
pub fn run<E: Environment>(config: &DemoConfig, env: E) -> Result<DemoReport, DemoError> {
    let message = config.message.as_bytes();
    tracing::info!(len = message.len(), "starting walkthrough");

    let symmetric = SymmetricEngine::new(env.clone());

    let sealed = symmetric.encrypt(message).map_err(DemoError::at(Stage::SymmetricEncryption))?;
    tracing::info!(ciphertext_len = sealed.ciphertext.len(), "sealed with AES-256-GCM");

    let opened = symmetric
        .decrypt(&sealed.ciphertext, &sealed.key)
        .map_err(DemoError::at(Stage::SymmetricDecryption))?;
    check_roundtrip(message, &opened, Stage::SymmetricDecryption)?;
    tracing::info!("symmetric round trip complete");

    let asymmetric = AsymmetricEngine::new(env);

    let pair = asymmetric.generate_key_pair().map_err(DemoError::at(Stage::KeyGeneration))?;
    tracing::info!(modulus_bytes = pair.public_key().size(), "generated RSA key pair");

    let public_key_pem = if config.show_public_key {
        let pem = pair
            .public_key()
            .as_rsa()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| DemoError::Encoding { reason: e.to_string() })?;
        Some(pem)
    } else {
        None
    };

    let block = asymmetric
        .encrypt(message, pair.public_key())
        .map_err(DemoError::at(Stage::AsymmetricEncryption))?;
    tracing::info!(ciphertext_len = block.len(), "encrypted with RSA-OAEP");

    let recovered = asymmetric
        .decrypt(&block, pair.private_key())
        .map_err(DemoError::at(Stage::AsymmetricDecryption))?;
    check_roundtrip(message, &recovered, Stage::AsymmetricDecryption)?;
    tracing::info!("asymmetric round trip complete");

    Ok(DemoReport {
        original: config.message.clone(),
        symmetric_key: Preview::of(sealed.key.as_bytes(), config.key_preview_bytes),
        symmetric_ciphertext: Preview::of(&sealed.ciphertext, config.ciphertext_preview_bytes),
        symmetric_plaintext: String::from_utf8_lossy(&opened).into_owned(),
        public_key_pem,
        asymmetric_ciphertext: Preview::of(&block, config.ciphertext_preview_bytes),
        asymmetric_plaintext: String::from_utf8_lossy(&recovered).into_owned(),
    })
}

/// Write `report` to `out`.
pub fn write_report<W: Write>(report: &DemoReport, out: &mut W) -> Result<(), DemoError> {
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}

fn check_roundtrip(expected: &[u8], actual: &[u8], stage: Stage) -> Result<(), DemoError> {
    if expected == actual {
        Ok(())
    } else {
        tracing::error!(%stage, "decrypted message differs from input");
        Err(DemoError::RoundTripMismatch { stage })
    }
}
