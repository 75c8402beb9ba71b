//! Entropy source abstraction
//!
//! Random streams seed themselves lazily from an [`EntropySource`]. The
//! production source is the operating system's random device, opened at
//! most once per process and kept open until exit.

use std::fs::File;
use std::io::Read;
use std::sync::{Mutex, OnceLock, PoisonError};

use thiserror::Error;

/// Path of the OS random device.
const DEV_URANDOM: &str = "/dev/urandom";

/// Errors raised by an entropy source
///
/// Both variants are unrecoverable: the host is expected to treat them as
/// terminal rather than retry.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("couldn't open entropy device: {source}")]
    Open {
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't read {wanted} bytes from entropy source: {source}")]
    ShortRead {
        wanted: usize,
        #[source]
        source: std::io::Error,
    },
}

/// A byte-oriented source of seed material
///
/// Implementations must fill the whole buffer or fail: a short read is
/// reported as [`EntropyError::ShortRead`], never as partial success.
pub trait EntropySource {
    /// Fill `buf` completely with entropy bytes.
    fn read_exact(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system's random device (`/dev/urandom`)
///
/// The device is opened by whichever thread first needs seed material.
/// The open step is guarded so concurrent first users cannot open it
/// twice; the handle then stays open for the life of the process and
/// reads take no lock (each read goes through an independent `&File`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

static DEVICE: OnceLock<File> = OnceLock::new();
static OPEN_GUARD: Mutex<()> = Mutex::new(());

/// Shared handle to the random device, opened on first use.
fn device() -> Result<&'static File, EntropyError> {
    if let Some(file) = DEVICE.get() {
        return Ok(file);
    }

    // Mutual exclusion covers only the open; re-check under the lock so
    // the loser of a race adopts the winner's handle.
    let _open = OPEN_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(file) = DEVICE.get() {
        return Ok(file);
    }
    let file = File::open(DEV_URANDOM).map_err(|source| EntropyError::Open { source })?;
    Ok(DEVICE.get_or_init(|| file))
}

impl EntropySource for OsEntropy {
    fn read_exact(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let mut handle: &File = device()?;
        handle.read_exact(buf).map_err(|source| EntropyError::ShortRead {
            wanted: buf.len(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_is_a_singleton() {
        let first = device().expect("open entropy device");
        let second = device().expect("open entropy device");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_read_fills_buffer() {
        let mut buf = [0u8; 16];
        OsEntropy.read_exact(&mut buf).expect("read entropy");
        // 16 zero bytes from urandom would be a one-in-2^128 fluke.
        assert_ne!(buf, [0u8; 16]);
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let mut buf = [0u8; 8];
                    OsEntropy.read_exact(&mut buf).expect("read entropy");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("entropy reader thread");
        }
    }
}
