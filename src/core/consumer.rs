//! Consumer side of the link.
//!
//! The consumer decides when it can accept a datum and, on acceptance,
//! captures it and emits a single-tick `done` pulse. Its `ready` flag is
//! pre-asserted: committed one tick before the producer samples it, never
//! derived from the same tick's `valid`.

use super::signals::Datum;
use super::state::State;
use serde::{Deserialize, Serialize};

/// States of the consumer machine.
///
/// - `Accepting`: `ready` is asserted; the consumer captures on the next
///   tick whose snapshot shows `valid` high.
/// - `Processing`: a datum was just captured; unavailable for exactly one
///   tick before returning to `Accepting`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ConsumerState {
    Accepting,
    Processing,
}

impl State for ConsumerState {
    fn name(&self) -> &str {
        match self {
            Self::Accepting => "Accepting",
            Self::Processing => "Processing",
        }
    }

    fn reset() -> Self {
        Self::Accepting
    }
}

/// Registered outputs of the consumer, committed at each tick boundary.
///
/// `ready` carries the availability the producer will observe next tick.
/// `done` is forced low on every tick except the single commit tick, so
/// it can never stretch to two consecutive ticks.
///
/// # Example
///
/// ```rust
/// use clasp::core::{ConsumerRegs, ConsumerState, Datum};
///
/// let accepting = ConsumerRegs::new();
/// assert!(accepting.ready);
///
/// // Producer's registered valid is high: the handshake commits.
/// let committed = accepting.step(true, Datum(0xA5));
/// assert_eq!(committed.state, ConsumerState::Processing);
/// assert!(committed.done);
/// assert_eq!(committed.captured, Datum(0xA5));
/// assert!(!committed.ready);
///
/// // One processing tick, then available again with done low.
/// let recovered = committed.step(false, Datum(0x00));
/// assert_eq!(recovered.state, ConsumerState::Accepting);
/// assert!(recovered.ready);
/// assert!(!recovered.done);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConsumerRegs {
    /// Current machine state.
    pub state: ConsumerState,
    /// The accept flag the producer samples next tick.
    pub ready: bool,
    /// One-tick pulse marking a committed transfer.
    pub done: bool,
    /// The last value accepted, until overwritten by the next transfer.
    pub captured: Datum,
}

impl ConsumerRegs {
    /// Registers as they stand at reset: accepting, `ready` pre-asserted,
    /// no pending pulse, nothing captured.
    pub fn new() -> Self {
        Self {
            state: ConsumerState::reset(),
            ready: true,
            done: false,
            captured: Datum::default(),
        }
    }

    /// Compute the next register file from one tick of inputs.
    ///
    /// `valid_observed` is the producer's `valid` as committed at the end
    /// of the previous tick; `datum_in` is the producer's registered held
    /// datum from the same snapshot. A transfer commits exactly when the
    /// machine is accepting, `valid_observed` is high, and its own
    /// registered `ready` was asserted in that snapshot.
    pub fn step(&self, valid_observed: bool, datum_in: Datum) -> ConsumerRegs {
        match self.state {
            ConsumerState::Accepting => {
                if valid_observed && self.ready {
                    ConsumerRegs {
                        state: ConsumerState::Processing,
                        ready: false,
                        done: true,
                        captured: datum_in,
                    }
                } else {
                    ConsumerRegs {
                        state: ConsumerState::Accepting,
                        ready: true,
                        done: false,
                        captured: self.captured,
                    }
                }
            }
            ConsumerState::Processing => ConsumerRegs {
                state: ConsumerState::Accepting,
                ready: true,
                done: false,
                captured: self.captured,
            },
        }
    }
}

impl Default for ConsumerRegs {
    fn default() -> Self {
        Self::new()
    }
}
