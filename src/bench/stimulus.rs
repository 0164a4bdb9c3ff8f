//! Stimulus schedules and the driver that plays them.
//!
//! A schedule is a list of high-level operations; the driver lowers them
//! into per-tick [`TickInput`]s, one input per call, reacting to the
//! outputs observed so far.

use crate::core::{Datum, LinkOutputs, TickInput};
use serde::{Deserialize, Serialize};

/// One operation in a stimulus schedule.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Stimulus {
    /// Raise `start` for exactly one tick, then hold inputs low until the
    /// matching `done` pulse is observed before advancing. This is the
    /// well-behaved transfer: one request, one delivery.
    Send(Datum),

    /// Raise `start` for exactly one tick and advance immediately,
    /// without waiting for delivery. A `Fire` issued while a transfer is
    /// already held or offered is ignored by the producer along with its
    /// datum; use it to exercise that path or to race a `Reset` against
    /// an in-flight transfer.
    Fire(Datum),

    /// Hold all inputs low for the given number of ticks.
    Pause(u64),

    /// Raise `reset` for one tick, aborting anything in flight.
    Reset,
}

/// Driver phase within the current operation.
#[derive(Clone, PartialEq, Debug)]
enum Phase {
    /// Ready to lower the next operation.
    Fresh,
    /// A `Send` pulse went out; waiting for its `done`.
    AwaitingDone,
    /// Emitting the remaining quiet ticks of a `Pause`.
    Pausing(u64),
}

/// Lowers a stimulus schedule into per-tick inputs.
///
/// # Example
///
/// ```rust
/// use clasp::bench::{Stimulus, StimulusDriver};
/// use clasp::core::{Datum, Link};
///
/// let mut driver = StimulusDriver::new(vec![
///     Stimulus::Send(Datum(0xA5)),
///     Stimulus::Pause(2),
/// ]);
/// let mut link = Link::new();
///
/// let mut outputs = link.outputs();
/// while !driver.is_drained() || !link.is_quiet() {
///     let input = driver.next_input(&outputs);
///     outputs = link.tick(&input);
/// }
/// assert_eq!(outputs.captured, Datum(0xA5));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct StimulusDriver {
    schedule: Vec<Stimulus>,
    index: usize,
    phase: Phase,
}

impl StimulusDriver {
    /// A driver positioned at the start of `schedule`.
    pub fn new(schedule: Vec<Stimulus>) -> Self {
        Self {
            schedule,
            index: 0,
            phase: Phase::Fresh,
        }
    }

    /// The schedule being played.
    pub fn schedule(&self) -> &[Stimulus] {
        &self.schedule
    }

    /// True once every operation has fully played out.
    ///
    /// A trailing `Send` keeps the driver undrained until its `done`
    /// pulse has been observed.
    pub fn is_drained(&self) -> bool {
        self.index >= self.schedule.len() && self.phase == Phase::Fresh
    }

    /// Produce the input for the next tick.
    ///
    /// `observed` is the registered output of the most recent tick; the
    /// driver uses it to notice `done` pulses. Once drained, every
    /// further input is quiet.
    pub fn next_input(&mut self, observed: &LinkOutputs) -> TickInput {
        loop {
            match self.phase {
                Phase::AwaitingDone => {
                    if observed.done {
                        self.index += 1;
                        self.phase = Phase::Fresh;
                        continue;
                    }
                    return TickInput::quiet();
                }
                Phase::Pausing(0) => {
                    self.index += 1;
                    self.phase = Phase::Fresh;
                    continue;
                }
                Phase::Pausing(left) => {
                    self.phase = Phase::Pausing(left - 1);
                    return TickInput::quiet();
                }
                Phase::Fresh => match self.schedule.get(self.index) {
                    None => return TickInput::quiet(),
                    Some(Stimulus::Send(datum)) => {
                        let datum = *datum;
                        self.phase = Phase::AwaitingDone;
                        return TickInput::send(datum);
                    }
                    Some(Stimulus::Fire(datum)) => {
                        let datum = *datum;
                        self.index += 1;
                        return TickInput::send(datum);
                    }
                    Some(Stimulus::Pause(ticks)) => {
                        self.phase = Phase::Pausing(*ticks);
                        continue;
                    }
                    Some(Stimulus::Reset) => {
                        self.index += 1;
                        return TickInput::reset();
                    }
                },
            }
        }
    }
}
