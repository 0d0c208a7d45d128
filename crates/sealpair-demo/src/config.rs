//! Walkthrough configuration.

/// Message protected when none is given on the command line.
pub const DEFAULT_MESSAGE: &str = "This is a secret message that needs to be protected.";

/// What to encrypt and how much of the result to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Message run through both engines
    pub message: String,
    /// Number of AES key bytes shown in hex
    pub key_preview_bytes: usize,
    /// Number of ciphertext bytes shown in hex
    pub ciphertext_preview_bytes: usize,
    /// Whether to include the public key as PEM
    pub show_public_key: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            key_preview_bytes: 8,
            ciphertext_preview_bytes: 16,
            show_public_key: true,
        }
    }
}
