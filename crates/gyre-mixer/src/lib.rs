//! Circular mixing for Gyre.
//!
//! A [`Mixer`] takes an ordered sequence of signed integers, arranges it
//! on a ring, and repeatedly moves each element by its own value, always
//! visiting elements in their *original* input order no matter where
//! earlier moves have put them. Afterwards values are read back at
//! offsets from an anchor element.
//!
//! # Pipeline
//!
//! ```text
//! &[i64] ──scale──▶ values ──▶ RingLinks (topology, mutable)
//!                     │        order: Vec<ElementId> (fixed)
//!                     └──────▶ AnchorIndex (value → handle)
//!
//! mix(rounds):  for id in order { relocate(id, value mod (N-1)) }
//! query(a, k):  walk k mod N from anchor a
//! ```
//!
//! [`decrypt`] wraps the whole pipeline for the common case of summing
//! the values 1000, 2000, and 3000 places after the zero element.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod anchor;
pub mod config;
pub mod grove;
pub mod mixer;

pub use anchor::AnchorIndex;
pub use config::{MixConfig, DECRYPTION_KEY, DECRYPTION_ROUNDS};
pub use grove::{decrypt, GROVE_ANCHOR, GROVE_OFFSETS};
pub use mixer::{Mixer, MixerState};
