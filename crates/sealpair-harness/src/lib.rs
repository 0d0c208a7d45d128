//! Deterministic test harness for the sealpair engines.
//!
//! Implementations of the Environment trait for reproducible and adversarial
//! testing, plus shared key fixtures.
//!
//! # Environments
//!
//! - [`SeededEnv`]: ChaCha20 seeded from a `u64`. Same seed, same bytes.
//! - [`FailingEnv`]: every fallible read fails, for exercising the
//!   random-source error path.
//!
//! # Fixtures
//!
//! RSA-2048 key generation takes long enough to dominate a test run. The
//! [`fixtures`] module generates each key pair once per test binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod failing_env;
pub mod fixtures;
mod seeded_env;

pub use failing_env::{FailingEnv, FailingRng};
pub use fixtures::{shared_key_pair, unrelated_key_pair};
pub use seeded_env::SeededEnv;
