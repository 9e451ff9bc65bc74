//! Strongly-typed element handles.

use std::fmt;

/// Handle to one element of a circular sequence.
///
/// `ElementId(n)` is the element built from the n-th input value, so the
/// handle doubles as the element's original index. Handles are dense
/// (`0..len`) and never reused within a single mixer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Largest number of elements addressable by an `ElementId`.
    pub const MAX_ELEMENTS: usize = u32::MAX as usize;

    /// The handle as a slot index into arena storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ElementId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
