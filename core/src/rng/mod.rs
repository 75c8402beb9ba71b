//! Deterministic random number generation
//!
//! Uses the MMIX linear congruential generator for fast, reproducible
//! sampling decisions. CRITICAL: All sampling randomness in the host MUST
//! go through this module.

mod stream;

pub use stream::RandomStream;
