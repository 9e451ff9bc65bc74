//! Gyre: a circular-sequence mixing engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gyre sub-crates. For most users, adding `gyre` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gyre::prelude::*;
//!
//! let input = [1, 2, -3, 3, -2, 0, 4];
//!
//! // One-shot: mix and sum the grove coordinates around the zero.
//! assert_eq!(decrypt(&input, &MixConfig::default()), Ok(3));
//!
//! // Step by step, with the decryption key applied.
//! let config = MixConfig::decryption();
//! let mut mixer = Mixer::from_config(&input, &config).unwrap();
//! mixer.mix(config.rounds);
//! assert_eq!(mixer.query(0, 1000), Ok(811_589_153));
//! assert_eq!(mixer.grove_sum(0, &GROVE_OFFSETS), Ok(1_623_178_306));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gyre-core` | `ElementId`, `MixError` |
//! | [`ring`] | `gyre-ring` | Index-linked circular arena and hop arithmetic |
//! | [`mixer`] | `gyre-mixer` | `Mixer`, `MixConfig`, anchor index, grove read-out |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element handles and the error type (`gyre-core`).
pub use gyre_core as types;

/// Circular link arena (`gyre-ring`).
///
/// Most users never touch [`ring::RingLinks`] directly; it is exposed for
/// inspection through [`mixer::Mixer::links`].
pub use gyre_ring as ring;

/// Mixing, configuration, and anchor queries (`gyre-mixer`).
pub use gyre_mixer as mixer;

pub use gyre_mixer::decrypt;

/// Common imports for typical Gyre usage.
///
/// ```rust
/// use gyre::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gyre_core::{ElementId, MixError};

    // Mixer
    pub use gyre_mixer::{
        decrypt, MixConfig, Mixer, MixerState, DECRYPTION_KEY, DECRYPTION_ROUNDS, GROVE_ANCHOR,
        GROVE_OFFSETS,
    };
}
