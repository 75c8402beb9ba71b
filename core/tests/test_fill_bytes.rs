//! Tests for pseudorandom byte filling.

use sampler_core_rs::RandomStream;

#[test]
fn test_fill_lengths() {
    let mut rng = RandomStream::with_seed(1);

    let mut empty: [u8; 0] = [];
    rng.fill_bytes(&mut empty).unwrap();

    let mut single = [0u8; 1];
    rng.fill_bytes(&mut single).unwrap();

    let mut large = vec![0u8; 65536];
    rng.fill_bytes(&mut large).unwrap();
    // A 64 KiB buffer of zeros would mean the fill never ran.
    assert!(large.iter().any(|&b| b != 0));
}

#[test]
fn test_fill_deterministic() {
    let mut rng1 = RandomStream::with_seed(2024);
    let mut rng2 = RandomStream::with_seed(2024);

    let mut buf1 = [0u8; 256];
    let mut buf2 = [0u8; 256];
    rng1.fill_bytes(&mut buf1).unwrap();
    rng2.fill_bytes(&mut buf2).unwrap();

    assert_eq!(buf1, buf2, "fill_bytes not deterministic!");
}

#[test]
fn test_fill_known_vector() {
    let mut rng = RandomStream::with_seed(99);
    let mut buf = [0u8; 8];
    rng.fill_bytes(&mut buf).unwrap();
    assert_eq!(buf, [77, 216, 71, 202, 209, 12, 107, 30]);
}

#[test]
fn test_empty_fill_still_advances_stream() {
    // The throwaway stream is seeded by a draw on the persistent one
    // before any byte is emitted, so an empty fill is not a no-op.
    let mut filled = RandomStream::with_seed(5);
    let mut drawn = RandomStream::with_seed(5);

    let mut empty: [u8; 0] = [];
    filled.fill_bytes(&mut empty).unwrap();
    drawn.next_in_range(0, 1 << 62).unwrap();

    assert_eq!(filled.state(), drawn.state());
}

#[test]
fn test_persistent_state_independent_of_fill_length() {
    // The byte loop runs on a local throwaway state; only the one seeding
    // draw touches the stream, whatever the buffer length.
    let mut short_fill = RandomStream::with_seed(5);
    let mut long_fill = RandomStream::with_seed(5);

    let mut small = [0u8; 1];
    let mut big = [0u8; 4096];
    short_fill.fill_bytes(&mut small).unwrap();
    long_fill.fill_bytes(&mut big).unwrap();

    assert_eq!(short_fill.state(), long_fill.state());
}

#[test]
fn test_consecutive_fills_differ() {
    let mut rng = RandomStream::with_seed(31337);

    let mut first = [0u8; 64];
    let mut second = [0u8; 64];
    rng.fill_bytes(&mut first).unwrap();
    rng.fill_bytes(&mut second).unwrap();

    assert_ne!(first, second, "consecutive fills should not repeat");
}
