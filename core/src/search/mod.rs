//! Sorted-key lookup
//!
//! Interpolation search over ascending arrays of u64 keys. Beats binary
//! search when the key distribution is near-uniform and degrades
//! gracefully otherwise.

mod interpolation;

pub use interpolation::interpolation_search;
