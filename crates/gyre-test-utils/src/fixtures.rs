//! Reusable input sequences.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The reference seven-element sequence.
///
/// One round at scale 1 gives grove coordinates `4, -3, 2` (sum `3`);
/// ten rounds at the decryption key give a sum of `1623178306`.
pub const SAMPLE_SEQUENCE: [i64; 7] = [1, 2, -3, 3, -2, 0, 4];

/// Deterministic pseudo-random sequence of `len` values in
/// `[-magnitude, magnitude]` containing exactly one `0`.
///
/// The same `seed` always produces the same sequence. `len` must be at
/// least 1 and `magnitude` at least 1.
pub fn random_sequence(len: usize, magnitude: i64, seed: u64) -> Vec<i64> {
    assert!(len >= 1, "random_sequence needs len >= 1");
    assert!(magnitude >= 1, "random_sequence needs magnitude >= 1");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = 2 * magnitude as u64 + 1;
    let zero_at = (rng.next_u64() % len as u64) as usize;
    (0..len)
        .map(|i| {
            if i == zero_at {
                return 0;
            }
            loop {
                let v = (rng.next_u64() % width) as i64 - magnitude;
                if v != 0 {
                    return v;
                }
            }
        })
        .collect()
}
