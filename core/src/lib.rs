//! Sampler Core - Deterministic Sampling Engine
//!
//! Reproducible pseudorandom sampling and fast sorted-key lookup for hosts
//! that need deterministic execution.
//!
//! # Architecture
//!
//! - **rng**: Per-context deterministic random streams (MMIX LCG)
//! - **entropy**: Lazily-opened OS entropy source used for first-use seeding
//! - **search**: Interpolation search over sorted u64 keys
//! - **bytes**: Non-cryptographic hashing and raw buffer loads
//! - **clock**: Millisecond wall clock
//! - **text**: Numeric string classification
//!
//! # Critical Invariants
//!
//! 1. All sampling randomness is deterministic given the seed material (replayable)
//! 2. Each random stream is owned by exactly one execution context
//! 3. The OS entropy device is opened at most once per process

// Module declarations
pub mod bytes;
pub mod clock;
pub mod entropy;
pub mod rng;
pub mod search;
pub mod text;

// Re-exports for convenience
pub use bytes::{hash64, load_u32, load_u64};
pub use clock::now_millis;
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use rng::RandomStream;
pub use search::interpolation_search;
pub use text::is_number_like;
