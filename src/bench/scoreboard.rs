//! Pass/fail bookkeeping for observed deliveries.

use crate::core::Datum;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// A committed transfer observed on the link.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Delivery {
    /// Tick on which `done` pulsed.
    pub tick: u64,
    /// The captured datum reported with the pulse.
    pub datum: Datum,
}

/// Mismatches between expected and observed deliveries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreboardError {
    #[error("expected {expected} but observed {observed} at tick {tick}")]
    DatumMismatch {
        tick: u64,
        expected: Datum,
        observed: Datum,
    },

    #[error("unexpected delivery of {datum} at tick {tick}")]
    UnexpectedDelivery { tick: u64, datum: Datum },

    #[error("{count} expected delivery(ies) never observed")]
    MissingDeliveries { count: usize },
}

/// Orders expected deliveries and judges observed ones against them.
///
/// The scoreboard never panics on a mismatch - errors accumulate and the
/// verdict is read at the end, so a single bad delivery does not hide
/// later ones.
///
/// # Example
///
/// ```rust
/// use clasp::bench::Scoreboard;
/// use clasp::core::Datum;
///
/// let mut scoreboard = Scoreboard::new();
/// scoreboard.expect_all(&[Datum(0x11), Datum(0x22)]);
///
/// scoreboard.observe(4, Datum(0x11));
/// scoreboard.observe(9, Datum(0x22));
/// scoreboard.finish();
///
/// assert!(scoreboard.passed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    expected: VecDeque<Datum>,
    deliveries: Vec<Delivery>,
    errors: Vec<ScoreboardError>,
}

impl Scoreboard {
    /// An empty scoreboard expecting nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one expected datum, in delivery order.
    pub fn expect(&mut self, datum: Datum) {
        self.expected.push_back(datum);
    }

    /// Append a sequence of expected data, in delivery order.
    pub fn expect_all(&mut self, data: &[Datum]) {
        for datum in data {
            self.expected.push_back(*datum);
        }
    }

    /// Judge one observed delivery against the head of the expectation
    /// queue.
    pub fn observe(&mut self, tick: u64, datum: Datum) {
        self.deliveries.push(Delivery { tick, datum });
        match self.expected.pop_front() {
            Some(expected) if expected == datum => {}
            Some(expected) => self.errors.push(ScoreboardError::DatumMismatch {
                tick,
                expected,
                observed: datum,
            }),
            None => self
                .errors
                .push(ScoreboardError::UnexpectedDelivery { tick, datum }),
        }
    }

    /// Close the books: anything still expected becomes an error.
    pub fn finish(&mut self) {
        let count = self.expected.len();
        if count > 0 {
            self.errors.push(ScoreboardError::MissingDeliveries { count });
            self.expected.clear();
        }
    }

    /// All deliveries observed so far, in order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// All accumulated errors.
    pub fn errors(&self) -> &[ScoreboardError] {
        &self.errors
    }

    /// True when no mismatch has been recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
