//! Link-integrity errors reported by [`RingLinks::verify`](crate::RingLinks::verify).

use std::error::Error;
use std::fmt;

use gyre_core::ElementId;

/// A violated structural invariant of the ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// `next` and `prev` are not mutual inverses at this element.
    BrokenInverse {
        /// Element whose successor does not point back at it.
        element: ElementId,
        /// The successor in question.
        next: ElementId,
    },
    /// Following `next` from the first element does not visit every
    /// element exactly once before returning.
    OpenCycle {
        /// Number of elements visited before returning to the start.
        visited: usize,
        /// Number of elements in the ring.
        len: usize,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenInverse { element, next } => {
                write!(f, "link mismatch: next({element}) = {next}, but prev({next}) != {element}")
            }
            Self::OpenCycle { visited, len } => {
                write!(f, "ring is not a single cycle: visited {visited} of {len} elements")
            }
        }
    }
}

impl Error for LinkError {}
