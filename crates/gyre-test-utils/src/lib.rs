//! Test utilities for Gyre development.
//!
//! Provides the reference sample sequence, deterministic random inputs,
//! and checkers for the ring invariants that every mixing round must
//! preserve.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gyre_core::ElementId;
use gyre_mixer::Mixer;

pub use fixtures::{random_sequence, SAMPLE_SEQUENCE};

/// Panic unless every structural invariant of `mixer`'s ring holds:
/// `next`/`prev` are inverses, and walking `len` hops in either direction
/// from any element returns to it without revisiting anything earlier.
pub fn assert_ring_invariants(mixer: &Mixer) {
    let links = mixer.links();
    if let Err(e) = links.verify() {
        panic!("ring invariant violated: {e}");
    }
    let len = mixer.len();
    for i in 0..len as u32 {
        let start = ElementId(i);
        assert_eq!(links.prev(links.next(start)), start, "prev(next({start}))");
        assert_eq!(links.next(links.prev(start)), start, "next(prev({start}))");

        let mut fwd = start;
        let mut back = start;
        for step in 1..=len {
            fwd = links.next(fwd);
            back = links.prev(back);
            if step < len {
                assert_ne!(fwd, start, "forward cycle from {start} closed after {step} hops");
                assert_ne!(back, start, "backward cycle from {start} closed after {step} hops");
            }
        }
        assert_eq!(fwd, start, "forward walk of {len} hops from {start}");
        assert_eq!(back, start, "backward walk of {len} hops from {start}");
    }
}

/// Current values in ring order starting from `ElementId(0)`.
pub fn ring_values(mixer: &Mixer) -> Vec<i64> {
    mixer
        .links()
        .iter_from(ElementId(0))
        .map(|id| mixer.value_of(id))
        .collect()
}

/// Current values sorted, for multiset comparisons.
pub fn sorted_values(mixer: &Mixer) -> Vec<i64> {
    let mut values = ring_values(mixer);
    values.sort_unstable();
    values
}

/// `(predecessor, successor)` values around `id`.
pub fn neighbourhood(mixer: &Mixer, id: ElementId) -> (i64, i64) {
    let links = mixer.links();
    (
        mixer.value_of(links.prev(id)),
        mixer.value_of(links.next(id)),
    )
}
