//! Wave sequencer
//!
//! Produces the order in which waves are thrown. The opening is always one,
//! two, three, then four fruit so a new player ramps in; everything after is
//! rolled once per run and replayed as-is.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Number of tail steps rolled per batch
pub const TAIL_BATCH: usize = 1001;

/// One step of the wave sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceStep {
    Single,
    Double,
    Triple,
    Quadruple,
    /// One fruit now, four more spread over `chain_delay`
    Chain,
    /// One fruit now, four more spread over half of `chain_delay`
    FastChain,
}

impl SequenceStep {
    /// Fixed opening of every run
    pub const OPENING: [SequenceStep; 4] = [
        SequenceStep::Single,
        SequenceStep::Double,
        SequenceStep::Triple,
        SequenceStep::Quadruple,
    ];

    /// Kinds the random tail draws from
    pub const TAIL_KINDS: [SequenceStep; 4] = [
        SequenceStep::Triple,
        SequenceStep::Quadruple,
        SequenceStep::Chain,
        SequenceStep::FastChain,
    ];

    /// Fruit thrown immediately when the step fires
    pub fn immediate_count(&self) -> usize {
        match self {
            SequenceStep::Single => 1,
            SequenceStep::Double => 2,
            SequenceStep::Triple => 3,
            SequenceStep::Quadruple => 4,
            SequenceStep::Chain | SequenceStep::FastChain => 1,
        }
    }

    /// Divisor applied to `chain_delay` between delayed follow-ups, if any
    pub fn chain_divisor(&self) -> Option<f64> {
        match self {
            SequenceStep::Chain => Some(5.0),
            SequenceStep::FastChain => Some(10.0),
            _ => None,
        }
    }

    /// Total fruit the step produces, delayed ones included
    pub fn total_count(&self) -> usize {
        match self.chain_divisor() {
            Some(_) => self.immediate_count() + CHAIN_FOLLOW_UPS,
            None => self.immediate_count(),
        }
    }
}

/// Delayed single spawns that follow a chain opener
pub const CHAIN_FOLLOW_UPS: usize = 4;

/// Lazily replayed wave order with a per-run random tail
#[derive(Debug, Clone)]
pub struct RandomSequencer<R> {
    rng: R,
    tail: Vec<SequenceStep>,
    cursor: usize,
}

impl<R: RandomSource> RandomSequencer<R> {
    /// Create a sequencer and roll its first tail
    pub fn new(rng: R) -> Self {
        let mut sequencer = Self {
            rng,
            tail: Vec::new(),
            cursor: 0,
        };
        sequencer.reset();
        sequencer
    }

    /// Rewind to the opening and roll a fresh tail
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.tail.clear();
        self.roll_tail_batch();
    }

    /// Next step in the sequence
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> SequenceStep {
        let index = self.cursor;
        self.cursor += 1;

        if let Some(step) = SequenceStep::OPENING.get(index) {
            return *step;
        }

        let tail_index = index - SequenceStep::OPENING.len();
        while tail_index >= self.tail.len() {
            self.roll_tail_batch();
        }
        self.tail[tail_index]
    }

    /// Steps handed out since the last reset
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn roll_tail_batch(&mut self) {
        let last = SequenceStep::TAIL_KINDS.len() as i32 - 1;
        self.tail.reserve(TAIL_BATCH);
        for _ in 0..TAIL_BATCH {
            let pick = self.rng.int_in(0, last) as usize;
            self.tail.push(SequenceStep::TAIL_KINDS[pick]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::sequence_rng;

    #[test]
    fn test_opening_is_fixed() {
        let mut seq = RandomSequencer::new(sequence_rng(1));
        let opening: Vec<_> = (0..4).map(|_| seq.next()).collect();
        assert_eq!(opening, SequenceStep::OPENING.to_vec());
    }

    #[test]
    fn test_tail_uses_tail_kinds() {
        let mut seq = RandomSequencer::new(sequence_rng(2));
        for _ in 0..4 {
            seq.next();
        }
        for _ in 0..200 {
            assert!(SequenceStep::TAIL_KINDS.contains(&seq.next()));
        }
    }

    #[test]
    fn test_tail_is_fixed_within_a_run() {
        let mut a = RandomSequencer::new(sequence_rng(3));
        let mut b = RandomSequencer::new(sequence_rng(3));
        let xs: Vec<_> = (0..50).map(|_| a.next()).collect();
        let ys: Vec<_> = (0..50).map(|_| b.next()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_reset_replays_opening() {
        let mut seq = RandomSequencer::new(sequence_rng(4));
        for _ in 0..10 {
            seq.next();
        }
        seq.reset();
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.next(), SequenceStep::Single);
        assert_eq!(seq.next(), SequenceStep::Double);
    }

    #[test]
    fn test_tail_extends_past_first_batch() {
        let mut seq = RandomSequencer::new(sequence_rng(5));
        for _ in 0..(TAIL_BATCH + 10) {
            seq.next();
        }
        assert!(SequenceStep::TAIL_KINDS.contains(&seq.next()));
    }

    #[test]
    fn test_chain_counts() {
        assert_eq!(SequenceStep::Chain.total_count(), 5);
        assert_eq!(SequenceStep::FastChain.chain_divisor(), Some(10.0));
        assert_eq!(SequenceStep::Triple.total_count(), 3);
        assert_eq!(SequenceStep::Quadruple.chain_divisor(), None);
    }
}
