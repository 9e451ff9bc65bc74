//! The mixer: construction, mixing rounds, and anchor queries.

use gyre_core::{ElementId, MixError};
use gyre_ring::{shortest_hops, wrap_steps, RingLinks};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::anchor::AnchorIndex;
use crate::config::MixConfig;

/// Lifecycle of a [`Mixer`].
///
/// Queries are well-defined in both states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixerState {
    /// Built from input; no round has run yet.
    Constructed,
    /// At least one round has run.
    Mixed {
        /// Total rounds applied since construction.
        rounds: u64,
    },
}

/// A circular sequence that can be mixed in original order and queried
/// relative to an anchor value.
///
/// Element values and the processing order are fixed at construction;
/// mixing only rewires the ring.
///
/// # Examples
///
/// ```
/// use gyre_mixer::Mixer;
///
/// let mut mixer = Mixer::new(&[1, 2, -3, 3, -2, 0, 4], 1).unwrap();
/// mixer.mix(1);
/// let sum: i64 = [1000, 2000, 3000]
///     .iter()
///     .map(|&k| mixer.query(0, k).unwrap())
///     .sum();
/// assert_eq!(sum, 3);
/// ```
#[derive(Clone, Debug)]
pub struct Mixer {
    values: Vec<i64>,
    order: Vec<ElementId>,
    links: RingLinks,
    anchors: AnchorIndex,
    rounds_applied: u64,
}

impl Mixer {
    /// Build a mixer over `sequence`, multiplying every value by `scale`.
    ///
    /// The ring starts in input order and elements are processed in that
    /// order by every later round.
    ///
    /// # Errors
    ///
    /// - [`MixError::EmptySequence`] if `sequence` is empty.
    /// - [`MixError::SequenceTooLong`] if it cannot be addressed by `u32`
    ///   handles.
    /// - [`MixError::ScaleOverflow`] if a scaled value does not fit `i64`.
    pub fn new(sequence: &[i64], scale: i64) -> Result<Self, MixError> {
        let links = RingLinks::new(sequence.len())?;
        let values = sequence
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                value
                    .checked_mul(scale)
                    .ok_or(MixError::ScaleOverflow {
                        index,
                        value,
                        scale,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let order = (0..values.len() as u32).map(ElementId).collect();
        let anchors = AnchorIndex::build(&values);
        debug!(
            "built mixer: {} elements, scale {}, {} distinct values",
            values.len(),
            scale,
            anchors.distinct()
        );
        Ok(Self {
            values,
            order,
            links,
            anchors,
            rounds_applied: 0,
        })
    }

    /// Build a mixer using the scale from a validated `config`.
    ///
    /// The round count is not applied here; pass `config.rounds` to
    /// [`mix`](Self::mix).
    pub fn from_config(sequence: &[i64], config: &MixConfig) -> Result<Self, MixError> {
        config.validate()?;
        Self::new(sequence, config.scale)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false` — construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Scaled value of an element.
    pub fn value_of(&self, id: ElementId) -> i64 {
        self.values[id.index()]
    }

    /// The fixed order in which every round visits elements.
    pub fn processing_order(&self) -> &[ElementId] {
        &self.order
    }

    /// Read-only view of the current ring topology.
    pub fn links(&self) -> &RingLinks {
        &self.links
    }

    /// Total rounds applied since construction.
    pub fn rounds_applied(&self) -> u64 {
        self.rounds_applied
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MixerState {
        match self.rounds_applied {
            0 => MixerState::Constructed,
            rounds => MixerState::Mixed { rounds },
        }
    }

    /// Run `rounds` full mixing rounds.
    ///
    /// Each round visits every element in original input order and moves
    /// it `value mod (N - 1)` places (floored, so negative values move
    /// backward). With fewer than two elements nothing can move and the
    /// rounds are no-ops.
    pub fn mix(&mut self, rounds: u32) {
        if self.len() < 2 {
            debug!("mix: {} element ring, {rounds} rounds are no-ops", self.len());
            self.rounds_applied += u64::from(rounds);
            return;
        }
        for round in 1..=rounds {
            self.mix_round();
            self.rounds_applied += 1;
            debug!("mix: round {round}/{rounds} done");
        }
    }

    fn mix_round(&mut self) {
        // Moving element leaves N - 1 landing slots.
        let span = self.len() - 1;
        for &id in &self.order {
            let value = self.values[id.index()];
            let steps = wrap_steps(value, span);
            if steps == 0 {
                continue;
            }
            let hops = shortest_hops(steps, span);
            trace!("move {id} (value {value}): {steps} steps, walking {hops}");
            self.links.relocate(id, hops);
        }
    }

    /// Value `offset` places after the element carrying `anchor`.
    ///
    /// Offsets wrap modulo `N`; negative offsets count backward.
    ///
    /// # Errors
    ///
    /// - [`MixError::AnchorNotFound`] if no element has value `anchor`.
    /// - [`MixError::AmbiguousAnchor`] if more than one does.
    pub fn query(&self, anchor: i64, offset: i64) -> Result<i64, MixError> {
        let start = self.anchors.resolve(anchor)?;
        Ok(self.value_at(start, offset))
    }

    fn value_at(&self, start: ElementId, offset: i64) -> i64 {
        let len = self.len();
        let hops = shortest_hops(wrap_steps(offset, len), len);
        self.values[self.links.walk(start, hops).index()]
    }

    /// Values at each of `offsets` relative to `anchor`.
    pub fn coordinates(
        &self,
        anchor: i64,
        offsets: &[i64],
    ) -> Result<SmallVec<[i64; 4]>, MixError> {
        let start = self.anchors.resolve(anchor)?;
        Ok(offsets
            .iter()
            .map(|&offset| self.value_at(start, offset))
            .collect())
    }

    /// Sum of the values at `offsets` relative to `anchor`.
    pub fn grove_sum(&self, anchor: i64, offsets: &[i64]) -> Result<i64, MixError> {
        Ok(self.coordinates(anchor, offsets)?.iter().sum())
    }

    /// The whole ring in `next` order, starting at `anchor`.
    pub fn sequence_from(&self, anchor: i64) -> Result<Vec<i64>, MixError> {
        let start = self.anchors.resolve(anchor)?;
        Ok(self
            .links
            .iter_from(start)
            .map(|id| self.values[id.index()])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 7] = [1, 2, -3, 3, -2, 0, 4];

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn empty_sequence_rejected() {
        assert_eq!(Mixer::new(&[], 1).unwrap_err(), MixError::EmptySequence);
    }

    #[test]
    fn scale_applied_to_every_value() {
        let mixer = Mixer::new(&[1, -2, 0], 10).unwrap();
        assert_eq!(mixer.value_of(ElementId(0)), 10);
        assert_eq!(mixer.value_of(ElementId(1)), -20);
        assert_eq!(mixer.value_of(ElementId(2)), 0);
    }

    #[test]
    fn scale_overflow_reported() {
        let err = Mixer::new(&[1, i64::MAX / 2 + 1], 2).unwrap_err();
        assert_eq!(
            err,
            MixError::ScaleOverflow {
                index: 1,
                value: i64::MAX / 2 + 1,
                scale: 2
            }
        );
    }

    #[test]
    fn from_config_validates() {
        let err = Mixer::from_config(&SAMPLE, &MixConfig::new(0, 1)).unwrap_err();
        assert!(matches!(err, MixError::InvalidConfig { .. }));
    }

    #[test]
    fn processing_order_is_input_order() {
        let mixer = Mixer::new(&SAMPLE, 1).unwrap();
        let order: Vec<u32> = mixer.processing_order().iter().map(|id| id.0).collect();
        assert_eq!(order, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn queries_work_before_mixing() {
        let mixer = Mixer::new(&SAMPLE, 1).unwrap();
        assert_eq!(mixer.state(), MixerState::Constructed);
        assert_eq!(mixer.query(0, 1), Ok(4));
        assert_eq!(mixer.query(0, -1), Ok(-2));
        assert_eq!(mixer.sequence_from(0).unwrap(), vec![0, 4, 1, 2, -3, 3, -2]);
    }

    // ── Mixing ──────────────────────────────────────────────────

    #[test]
    fn single_round_sample_order() {
        let mut mixer = Mixer::new(&SAMPLE, 1).unwrap();
        mixer.mix(1);
        assert_eq!(mixer.sequence_from(0).unwrap(), vec![0, 3, -2, 1, 2, -3, 4]);
        assert_eq!(mixer.state(), MixerState::Mixed { rounds: 1 });
    }

    #[test]
    fn single_round_sample_grove() {
        let mut mixer = Mixer::new(&SAMPLE, 1).unwrap();
        mixer.mix(1);
        let coords = mixer.coordinates(0, &[1000, 2000, 3000]).unwrap();
        assert_eq!(coords.as_slice(), &[4, -3, 2]);
        assert_eq!(mixer.grove_sum(0, &[1000, 2000, 3000]), Ok(3));
    }

    #[test]
    fn ten_scaled_rounds_sample() {
        let mut mixer = Mixer::new(&SAMPLE, 811_589_153).unwrap();
        mixer.mix(10);
        assert_eq!(
            mixer.sequence_from(0).unwrap(),
            vec![
                0,
                -2_434_767_459,
                1_623_178_306,
                3_246_356_612,
                -1_623_178_306,
                2_434_767_459,
                811_589_153,
            ]
        );
        assert_eq!(mixer.grove_sum(0, &[1000, 2000, 3000]), Ok(1_623_178_306));
        assert_eq!(mixer.rounds_applied(), 10);
    }

    #[test]
    fn rounds_accumulate_across_calls() {
        let mut split = Mixer::new(&SAMPLE, 811_589_153).unwrap();
        split.mix(4);
        split.mix(6);
        let mut whole = Mixer::new(&SAMPLE, 811_589_153).unwrap();
        whole.mix(10);
        assert_eq!(split.sequence_from(0), whole.sequence_from(0));
        assert_eq!(split.state(), MixerState::Mixed { rounds: 10 });
    }

    #[test]
    fn zero_rounds_leave_state_constructed() {
        let mut mixer = Mixer::new(&SAMPLE, 1).unwrap();
        mixer.mix(0);
        assert_eq!(mixer.state(), MixerState::Constructed);
        assert_eq!(mixer.sequence_from(0).unwrap(), vec![0, 4, 1, 2, -3, 3, -2]);
    }

    #[test]
    fn multiple_of_span_does_not_move() {
        // N = 4, span = 3: both 6 and -3 are full circles.
        let mut mixer = Mixer::new(&[6, 0, -3, 9], 1).unwrap();
        mixer.mix(1);
        assert_eq!(mixer.sequence_from(0).unwrap(), vec![0, -3, 9, 6]);
    }

    #[test]
    fn two_elements_never_move() {
        let mut mixer = Mixer::new(&[0, 5], 1).unwrap();
        mixer.mix(3);
        assert_eq!(mixer.sequence_from(0).unwrap(), vec![0, 5]);
        mixer.links().verify().unwrap();
    }

    // ── Degenerate ring ─────────────────────────────────────────

    #[test]
    fn single_element_mix_is_no_op() {
        let mut mixer = Mixer::new(&[7], 1).unwrap();
        mixer.mix(5);
        assert_eq!(mixer.links().next(ElementId(0)), ElementId(0));
        assert_eq!(mixer.links().prev(ElementId(0)), ElementId(0));
        assert_eq!(mixer.state(), MixerState::Mixed { rounds: 5 });
    }

    #[test]
    fn single_element_query_returns_itself() {
        let mixer = Mixer::new(&[7], 1).unwrap();
        for offset in [-1000, -1, 0, 1, 3000, i64::MAX, i64::MIN] {
            assert_eq!(mixer.query(7, offset), Ok(7));
        }
    }

    // ── Query errors ────────────────────────────────────────────

    #[test]
    fn query_missing_anchor() {
        let mixer = Mixer::new(&[1, 2, 3], 1).unwrap();
        assert_eq!(
            mixer.query(0, 1000),
            Err(MixError::AnchorNotFound { anchor: 0 })
        );
    }

    #[test]
    fn query_ambiguous_anchor() {
        let mixer = Mixer::new(&[4, 4, 4], 1).unwrap();
        assert_eq!(
            mixer.query(4, 1),
            Err(MixError::AmbiguousAnchor {
                anchor: 4,
                occurrences: 3
            })
        );
        assert!(mixer.sequence_from(4).is_err());
    }

    #[test]
    fn mixer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Mixer>();
    }
}
