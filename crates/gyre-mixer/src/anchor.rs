//! Value → element lookup for anchor queries.

use gyre_core::{ElementId, MixError};
use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AnchorSlot {
    Unique(ElementId),
    Repeated(usize),
}

/// Maps each distinct value to the element carrying it.
///
/// Built once from the scaled values. Values are immutable, so the index
/// never needs updating while mixing. Values that occur more than once are
/// remembered with their count so that anchoring on them is rejected
/// instead of silently picking one.
#[derive(Clone, Debug, Default)]
pub struct AnchorIndex {
    slots: IndexMap<i64, AnchorSlot>,
}

impl AnchorIndex {
    /// Index `values`, where `values[i]` belongs to `ElementId(i)`.
    pub fn build(values: &[i64]) -> Self {
        let mut slots = IndexMap::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            slots
                .entry(value)
                .and_modify(|slot| {
                    *slot = match *slot {
                        AnchorSlot::Unique(_) => AnchorSlot::Repeated(2),
                        AnchorSlot::Repeated(n) => AnchorSlot::Repeated(n + 1),
                    }
                })
                .or_insert(AnchorSlot::Unique(ElementId(i as u32)));
        }
        Self { slots }
    }

    /// The element carrying `anchor`.
    ///
    /// # Errors
    ///
    /// - [`MixError::AnchorNotFound`] if no element has this value.
    /// - [`MixError::AmbiguousAnchor`] if several elements do.
    pub fn resolve(&self, anchor: i64) -> Result<ElementId, MixError> {
        match self.slots.get(&anchor) {
            Some(AnchorSlot::Unique(id)) => Ok(*id),
            Some(AnchorSlot::Repeated(occurrences)) => Err(MixError::AmbiguousAnchor {
                anchor,
                occurrences: *occurrences,
            }),
            None => Err(MixError::AnchorNotFound { anchor }),
        }
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    /// Values usable as anchors (those occurring exactly once), in
    /// first-seen order.
    pub fn unique_values(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().filter_map(|(&value, slot)| match slot {
            AnchorSlot::Unique(_) => Some(value),
            AnchorSlot::Repeated(_) => None,
        })
    }
}
