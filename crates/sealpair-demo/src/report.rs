//! Human-readable summary of a walkthrough run.
//!
//! Only previews of secret material end up here: the AES key is shown as a
//! short hex prefix and the private key is never rendered.

use std::fmt;

/// Hex rendering of the first bytes of a longer buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Hex of the shown prefix
    pub hex: String,
    /// Number of bytes shown
    pub shown: usize,
    /// Total buffer length
    pub total: usize,
}

impl Preview {
    /// Preview at most `limit` leading bytes of `bytes`.
    pub fn of(bytes: &[u8], limit: usize) -> Self {
        let shown = limit.min(bytes.len());
        Self { hex: hex::encode(&bytes[..shown]), shown, total: bytes.len() }
    }

    /// True when some bytes were left out.
    pub fn is_truncated(&self) -> bool {
        self.shown < self.total
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)?;
        if self.is_truncated() {
            f.write_str("...")?;
        }
        Ok(())
    }
}

/// Outputs of one run through both engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// The input message
    pub original: String,
    /// Leading bytes of the AES key
    pub symmetric_key: Preview,
    /// Leading bytes of `nonce || sealed || tag`
    pub symmetric_ciphertext: Preview,
    /// Message recovered with the AES key
    pub symmetric_plaintext: String,
    /// SPKI PEM of the generated public key, if requested
    pub public_key_pem: Option<String>,
    /// Leading bytes of the OAEP block
    pub asymmetric_ciphertext: Preview,
    /// Message recovered with the private key
    pub asymmetric_plaintext: String,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Message: {}", self.original)?;

        writeln!(f)?;
        writeln!(f, "--- Symmetric Cryptography (AES-256-GCM) ---")?;
        writeln!(f, "AES Key (first {} bytes): {}", self.symmetric_key.shown, self.symmetric_key)?;
        writeln!(
            f,
            "Symmetric Ciphertext (first {} of {} bytes): {}",
            self.symmetric_ciphertext.shown,
            self.symmetric_ciphertext.total,
            self.symmetric_ciphertext
        )?;
        writeln!(f, "Decrypted Symmetric Plaintext: {}", self.symmetric_plaintext)?;

        writeln!(f)?;
        writeln!(f, "--- Asymmetric Cryptography (RSA-2048 OAEP/SHA-256) ---")?;
        if let Some(pem) = &self.public_key_pem {
            writeln!(f, "Generated Public Key (PEM format):")?;
            writeln!(f, "{}", pem.trim_end())?;
        }
        writeln!(
            f,
            "Asymmetric Ciphertext (first {} of {} bytes): {}",
            self.asymmetric_ciphertext.shown,
            self.asymmetric_ciphertext.total,
            self.asymmetric_ciphertext
        )?;
        writeln!(f, "Decrypted Asymmetric Plaintext: {}", self.asymmetric_plaintext)
    }
}
