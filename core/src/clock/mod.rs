//! Wall-clock time

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// # Panics
/// Panics if the system clock reads before the Unix epoch.
pub fn now_millis() -> i64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock reads before the Unix epoch");
    elapsed.as_millis() as i64
}
