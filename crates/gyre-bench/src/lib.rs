//! Benchmark profiles for the Gyre mixing engine.
//!
//! - [`reference_input`]: 5000 values in `[-10000, 10000]`, one zero
//! - [`reference_mixer`]: a mixer over the reference input, unmixed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gyre_mixer::{MixConfig, Mixer};
use gyre_test_utils::random_sequence;

/// Element count of the reference profile.
pub const REFERENCE_LEN: usize = 5000;

/// Largest absolute input value in the reference profile.
pub const REFERENCE_MAGNITUDE: i64 = 10_000;

/// Deterministic reference input for `seed`.
pub fn reference_input(seed: u64) -> Vec<i64> {
    random_sequence(REFERENCE_LEN, REFERENCE_MAGNITUDE, seed)
}

/// Fresh mixer over [`reference_input`] with `config`'s scale applied.
pub fn reference_mixer(seed: u64, config: &MixConfig) -> Mixer {
    Mixer::from_config(&reference_input(seed), config)
        .expect("reference input is non-empty and the scale fits i64")
}
