//! The circular link arena.

use gyre_core::{ElementId, MixError};

use crate::error::LinkError;

/// Circular doubly-linked ordering over a fixed set of elements.
///
/// Slot `i` belongs to `ElementId(i)`. Links are plain indices, so the
/// structure can be rewired freely without any borrow gymnastics. The
/// element count never changes after construction.
///
/// # Examples
///
/// ```
/// use gyre_core::ElementId;
/// use gyre_ring::RingLinks;
///
/// let mut ring = RingLinks::new(5).unwrap();
/// assert_eq!(ring.next(ElementId(4)), ElementId(0));
///
/// // Move element 0 two places forward: 1 2 0 3 4
/// ring.relocate(ElementId(0), 2);
/// let order: Vec<u32> = ring.iter_from(ElementId(1)).map(|id| id.0).collect();
/// assert_eq!(order, vec![1, 2, 0, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct RingLinks {
    next: Vec<u32>,
    prev: Vec<u32>,
}

impl RingLinks {
    /// Maximum element count: handles are `u32`.
    pub const MAX_LEN: usize = ElementId::MAX_ELEMENTS;

    /// Create a ring of `len` elements wired in natural order
    /// (`next(i) = (i + 1) mod len`).
    ///
    /// Returns `Err(MixError::EmptySequence)` if `len == 0`, or
    /// `Err(MixError::SequenceTooLong)` if `len` exceeds [`Self::MAX_LEN`].
    pub fn new(len: usize) -> Result<Self, MixError> {
        if len == 0 {
            return Err(MixError::EmptySequence);
        }
        if len > Self::MAX_LEN {
            return Err(MixError::SequenceTooLong {
                len,
                max: Self::MAX_LEN,
            });
        }
        let n = len as u32;
        let next = (0..n).map(|i| if i + 1 == n { 0 } else { i + 1 }).collect();
        let prev = (0..n).map(|i| if i == 0 { n - 1 } else { i - 1 }).collect();
        Ok(Self { next, prev })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Always returns `false` — construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Successor of `id`.
    #[inline]
    pub fn next(&self, id: ElementId) -> ElementId {
        ElementId(self.next[id.index()])
    }

    /// Predecessor of `id`.
    #[inline]
    pub fn prev(&self, id: ElementId) -> ElementId {
        ElementId(self.prev[id.index()])
    }

    /// Follow `hops` links from `from`: toward `next` when positive,
    /// toward `prev` when negative.
    ///
    /// No reduction is applied; callers pass an already-shortened count
    /// (see [`shortest_hops`](crate::shortest_hops)).
    pub fn walk(&self, from: ElementId, hops: i64) -> ElementId {
        let links = if hops >= 0 { &self.next } else { &self.prev };
        let mut cursor = from.0;
        for _ in 0..hops.unsigned_abs() {
            cursor = links[cursor as usize];
        }
        ElementId(cursor)
    }

    /// Detach `id` from the ring, joining its neighbours directly.
    ///
    /// Returns the former predecessor. `id`'s own links are left stale
    /// until it is re-inserted with [`insert_after`](Self::insert_after);
    /// the remaining `len - 1` elements form a valid ring in between.
    pub fn unlink(&mut self, id: ElementId) -> ElementId {
        let i = id.index();
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p as usize] = n;
        self.prev[n as usize] = p;
        ElementId(p)
    }

    /// Splice a detached `id` in immediately after `target`.
    pub fn insert_after(&mut self, target: ElementId, id: ElementId) {
        let t = target.index();
        let after = self.next[t];
        self.next[id.index()] = after;
        self.prev[id.index()] = target.0;
        self.prev[after as usize] = id.0;
        self.next[t] = id.0;
    }

    /// Move `id` by `hops` places around the ring formed by the *other*
    /// elements (a circle of `len - 1`).
    ///
    /// The walk starts at `id`'s predecessor after detaching it, and `id`
    /// lands right after wherever the walk stops. A zero hop count, or a
    /// ring with fewer than two elements, leaves the topology untouched.
    pub fn relocate(&mut self, id: ElementId, hops: i64) {
        if hops == 0 || self.len() < 2 {
            return;
        }
        let origin = self.unlink(id);
        let target = self.walk(origin, hops);
        self.insert_after(target, id);
    }

    /// Iterate over all elements once, in `next` order, starting at `start`.
    pub fn iter_from(&self, start: ElementId) -> RingIter<'_> {
        RingIter {
            links: self,
            cursor: start,
            remaining: self.len(),
        }
    }

    /// Check the structural invariants: `next`/`prev` are mutual inverses
    /// and following `next` from any element visits all `len` elements
    /// before coming back.
    pub fn verify(&self) -> Result<(), LinkError> {
        for (i, &n) in self.next.iter().enumerate() {
            if self.prev[n as usize] as usize != i {
                return Err(LinkError::BrokenInverse {
                    element: ElementId(i as u32),
                    next: ElementId(n),
                });
            }
        }
        // With inverses intact `next` is a permutation, so this terminates.
        let mut visited = 1;
        let mut cursor = self.next[0];
        while cursor != 0 {
            visited += 1;
            cursor = self.next[cursor as usize];
        }
        if visited != self.len() {
            return Err(LinkError::OpenCycle {
                visited,
                len: self.len(),
            });
        }
        Ok(())
    }
}

/// Iterator returned by [`RingLinks::iter_from`].
pub struct RingIter<'a> {
    links: &'a RingLinks,
    cursor: ElementId,
    remaining: usize,
}

impl Iterator for RingIter<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.cursor;
        self.cursor = self.links.next(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter<'_> {}
