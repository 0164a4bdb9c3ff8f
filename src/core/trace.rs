//! Tick-by-tick waveform capture.
//!
//! Provides immutable recording of committed ticks over time, following
//! functional programming principles: recording returns a new trace and
//! never mutates an existing one.

use super::consumer::ConsumerState;
use super::producer::ProducerState;
use super::signals::{LinkOutputs, TickInput};
use serde::{Deserialize, Serialize};

/// Record of a single committed tick.
///
/// A record holds the stimulus sampled for the tick, the registered
/// outputs after the commit, and both machine states - enough to replay
/// or inspect the waveform offline.
///
/// # Example
///
/// ```rust
/// use clasp::core::{Datum, Link, TickInput, TickRecord, Trace};
///
/// let mut link = Link::new();
/// let input = TickInput::send(Datum(0xA5));
/// let outputs = link.tick(&input);
///
/// let record = TickRecord {
///     tick: 0,
///     input,
///     outputs,
///     producer: link.producer().state.clone(),
///     consumer: link.consumer().state.clone(),
/// };
/// let trace = Trace::new().record(record);
/// assert_eq!(trace.len(), 1);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TickRecord {
    /// Tick number, counted from the start of the run.
    pub tick: u64,
    /// The stimulus sampled for this tick.
    pub input: TickInput,
    /// Registered outputs as committed at this tick boundary.
    pub outputs: LinkOutputs,
    /// Producer state after the commit.
    pub producer: ProducerState,
    /// Consumer state after the commit.
    pub consumer: ConsumerState,
}

/// Ordered capture of committed ticks.
///
/// The trace is immutable - `record` returns a new trace with the tick
/// appended, leaving the original unchanged.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    records: Vec<TickRecord>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a tick, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the record appended.
    pub fn record(&self, record: TickRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded ticks in order.
    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    /// The ticks on which a transfer committed (`done` asserted).
    pub fn commits(&self) -> Vec<&TickRecord> {
        self.records.iter().filter(|r| r.outputs.done).collect()
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
