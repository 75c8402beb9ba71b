//! MMIX linear congruential random stream
//!
//! # Algorithm
//!
//! `state = a * state + c`, wrapping modulo 2^64, with Knuth's MMIX
//! constants. The wraparound is part of the algorithm, not an overflow to
//! guard against.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact sampling run)
//! - Testing (verify behavior)
//! - Replay (resume from a checkpointed state)
//!
//! The stream is NOT cryptographically secure and must never drive
//! security-sensitive decisions.

use serde::{Deserialize, Serialize};

use crate::entropy::{EntropyError, EntropySource, OsEntropy};

/// MMIX LCG multiplier.
const MULTIPLIER: u64 = 6364136223846793005;

/// MMIX LCG increment.
const INCREMENT: u64 = 1442695040888963407;

/// Upper bound (inclusive) of the draw that seeds a byte-fill stream.
const FILL_SEED_BOUND: u64 = 1 << 62;

/// Deterministic random stream owned by a single execution context
///
/// A stream left unseeded pulls 8 bytes from the entropy source on its
/// first draw and is a pure function of that seed afterwards. Streams are
/// never shared between contexts, so no locking guards the state.
///
/// # Example
/// ```
/// use sampler_core_rs::RandomStream;
///
/// let mut rng = RandomStream::with_seed(12345);
/// let value = rng.next_in_range(0, 100).unwrap();
/// assert!(value <= 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomStream {
    /// Whether the state has been seeded yet
    initialized: bool,
    /// Internal state (64-bit)
    state: u64,
}

impl RandomStream {
    /// Create an unseeded stream
    ///
    /// The first draw seeds it from the entropy source; see
    /// [`RandomStream::next_in_range`].
    pub const fn new() -> Self {
        Self {
            initialized: false,
            state: 0,
        }
    }

    /// Create a stream seeded with a known value
    ///
    /// The entropy source is never consulted. Use this for reproduction
    /// and for resuming from a checkpointed state.
    ///
    /// # Example
    /// ```
    /// use sampler_core_rs::RandomStream;
    ///
    /// let mut rng1 = RandomStream::with_seed(42);
    /// let mut rng2 = RandomStream::with_seed(42);
    /// assert_eq!(
    ///     rng1.next_in_range(0, 99).unwrap(),
    ///     rng2.next_in_range(0, 99).unwrap(),
    /// );
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            initialized: true,
            state: seed,
        }
    }

    /// Draw a value in `[min, max]`, both bounds inclusive
    ///
    /// On the first draw of an unseeded stream this opens the process-wide
    /// entropy device (once per process, however many streams race to it)
    /// and reads an 8-byte seed; entropy failure is returned as the fatal
    /// [`EntropyError`] class and the host is expected to terminate on it.
    ///
    /// The reduction is `(state % width) + min`, which carries modulo bias
    /// whenever the width is not a power of two. Callers accept that bias;
    /// the stream makes no uniformity guarantee.
    ///
    /// # Panics
    /// Panics if `min > max`.
    ///
    /// # Example
    /// ```
    /// use sampler_core_rs::RandomStream;
    ///
    /// let mut rng = RandomStream::with_seed(7);
    /// let pick = rng.next_in_range(10, 20).unwrap();
    /// assert!((10..=20).contains(&pick));
    /// ```
    pub fn next_in_range(&mut self, min: u64, max: u64) -> Result<u64, EntropyError> {
        self.next_in_range_from(&OsEntropy, min, max)
    }

    /// [`RandomStream::next_in_range`] drawing seed material from `entropy`
    ///
    /// Tests inject a scripted source here; production code uses the plain
    /// form.
    pub fn next_in_range_from(
        &mut self,
        entropy: &dyn EntropySource,
        min: u64,
        max: u64,
    ) -> Result<u64, EntropyError> {
        assert!(min <= max, "min must not exceed max");

        self.ensure_seeded(entropy)?;
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        let value = match (max - min).checked_add(1) {
            Some(width) => (self.state % width) + min,
            // Width spans the whole u64 domain; the modulo is an identity.
            None => self.state,
        };
        Ok(value)
    }

    /// Fill `buf` with pseudorandom bytes
    ///
    /// Seeds a throwaway stream from one `[0, 2^62]` draw on this stream,
    /// then emits the low 8 bits of each subsequent LCG step. The
    /// throwaway stream never feeds back into this one, and the seeding
    /// draw happens even for an empty buffer.
    ///
    /// # Example
    /// ```
    /// use sampler_core_rs::RandomStream;
    ///
    /// let mut rng = RandomStream::with_seed(99);
    /// let mut buf = [0u8; 16];
    /// rng.fill_bytes(&mut buf).unwrap();
    /// ```
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_from(&OsEntropy, buf)
    }

    /// [`RandomStream::fill_bytes`] drawing seed material from `entropy`
    pub fn fill_bytes_from(
        &mut self,
        entropy: &dyn EntropySource,
        buf: &mut [u8],
    ) -> Result<(), EntropyError> {
        let mut local = self.next_in_range_from(entropy, 0, FILL_SEED_BOUND)?;
        for byte in buf.iter_mut() {
            local = local.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
            *byte = local as u8;
        }
        Ok(())
    }

    /// Get current stream state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use sampler_core_rs::RandomStream;
    ///
    /// let mut rng = RandomStream::with_seed(12345);
    /// rng.next_in_range(0, 9).unwrap();
    ///
    /// // Later, resume the sequence from this state
    /// let resumed = RandomStream::with_seed(rng.state());
    /// assert_eq!(resumed.state(), rng.state());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Whether the stream has been seeded yet
    pub fn is_seeded(&self) -> bool {
        self.initialized
    }

    fn ensure_seeded(&mut self, entropy: &dyn EntropySource) -> Result<(), EntropyError> {
        if self.initialized {
            return Ok(());
        }
        let mut seed = [0u8; 8];
        entropy.read_exact(&mut seed)?;
        self.state = u64::from_ne_bytes(seed);
        self.initialized = true;
        Ok(())
    }
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::new()
    }
}
