//! Sealpair walkthrough binary.
//!
//! # Usage
//!
//! ```bash
//! # Protect the built-in message
//! sealpair
//!
//! # Protect a custom message and skip the PEM dump
//! sealpair "meet at noon" --no-pem
//! ```

use std::io;

use clap::Parser;
use sealpair_crypto::SystemEnv;
use sealpair_demo::{DEFAULT_MESSAGE, DemoConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Encrypt a message with AES-256-GCM and RSA-OAEP, then decrypt it again
#[derive(Parser, Debug)]
#[command(name = "sealpair")]
#[command(about = "Symmetric and asymmetric encryption walkthrough")]
#[command(version)]
struct Args {
    /// Message to protect
    #[arg(default_value = DEFAULT_MESSAGE)]
    message: String,

    /// Number of AES key bytes to show
    #[arg(long, default_value = "8")]
    key_preview: usize,

    /// Number of ciphertext bytes to show
    #[arg(long, default_value = "16")]
    ciphertext_preview: usize,

    /// Do not print the generated public key
    #[arg(long)]
    no_pem: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = DemoConfig {
        message: args.message,
        key_preview_bytes: args.key_preview,
        ciphertext_preview_bytes: args.ciphertext_preview,
        show_public_key: !args.no_pem,
    };

    let report = sealpair_demo::run(&config, SystemEnv::new())?;
    sealpair_demo::write_report(&report, &mut io::stdout().lock())?;

    Ok(())
}
