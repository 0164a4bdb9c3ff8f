//! Producer side of the link.
//!
//! The producer holds at most one outstanding datum and decides when to
//! assert `valid`. Its transition function is pure and total: every
//! state/input combination maps to exactly one next register file, so a
//! stalled consumer is ordinary waiting rather than a fault.

use super::signals::Datum;
use super::state::State;
use serde::{Deserialize, Serialize};

/// States of the producer machine.
///
/// - `Idle`: no datum held.
/// - `HoldingForReady`: a datum was captured while the consumer was not
///   ready; it persists unchanged until consumed or reset.
/// - `WaitingForAck`: `valid` is asserted and the producer is waiting for
///   the consumer's `ready` to complete the handshake.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ProducerState {
    Idle,
    HoldingForReady,
    WaitingForAck,
}

impl State for ProducerState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::HoldingForReady => "HoldingForReady",
            Self::WaitingForAck => "WaitingForAck",
        }
    }

    fn reset() -> Self {
        Self::Idle
    }
}

/// Registered outputs of the producer, committed at each tick boundary.
///
/// `step` computes the next register file from the previous one; it never
/// mutates in place. The owning [`Link`](crate::core::Link) commits the
/// result atomically with the consumer's, which is what keeps both
/// machines reading a consistent snapshot.
///
/// # Example
///
/// A one-tick start request against a busy consumer is never lost: the
/// datum is captured immediately and held until `ready` is observed.
///
/// ```rust
/// use clasp::core::{Datum, ProducerRegs, ProducerState};
///
/// let idle = ProducerRegs::new();
/// let holding = idle.step(true, Datum(0xB7), false);
/// assert_eq!(holding.state, ProducerState::HoldingForReady);
/// assert_eq!(holding.held, Datum(0xB7));
/// assert!(!holding.valid);
///
/// // Start is long gone; the datum persists across busy ticks.
/// let still_holding = holding.step(false, Datum(0xFF), false);
/// assert_eq!(still_holding.held, Datum(0xB7));
///
/// // Ready finally observed: offer the held datum.
/// let offering = still_holding.step(false, Datum(0xFF), true);
/// assert_eq!(offering.state, ProducerState::WaitingForAck);
/// assert!(offering.valid);
/// assert_eq!(offering.held, Datum(0xB7));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ProducerRegs {
    /// Current machine state.
    pub state: ProducerState,
    /// The datum currently held or offered.
    pub held: Datum,
    /// The producer's offer flag as committed last tick.
    pub valid: bool,
}

impl ProducerRegs {
    /// Registers as they stand at reset: idle, nothing held, `valid` low.
    pub fn new() -> Self {
        Self {
            state: ProducerState::reset(),
            held: Datum::default(),
            valid: false,
        }
    }

    /// Compute the next register file from one tick of inputs.
    ///
    /// Inputs are the externally sampled `start` request and candidate
    /// `datum_in`, plus `ready_observed`: the consumer's `ready` as
    /// committed at the end of the previous tick. The function is pure;
    /// callers commit the returned registers at the tick boundary.
    ///
    /// A `start` raised while a datum is already held or offered is
    /// ignored, along with its datum, until the current transfer resolves.
    pub fn step(&self, start: bool, datum_in: Datum, ready_observed: bool) -> ProducerRegs {
        match self.state {
            ProducerState::Idle => {
                if start && ready_observed {
                    ProducerRegs {
                        state: ProducerState::WaitingForAck,
                        held: datum_in,
                        valid: true,
                    }
                } else if start {
                    // Consumer unavailable: capture now, offer later.
                    ProducerRegs {
                        state: ProducerState::HoldingForReady,
                        held: datum_in,
                        valid: false,
                    }
                } else {
                    ProducerRegs {
                        state: ProducerState::Idle,
                        held: self.held,
                        valid: false,
                    }
                }
            }
            ProducerState::HoldingForReady => {
                if ready_observed {
                    ProducerRegs {
                        state: ProducerState::WaitingForAck,
                        held: self.held,
                        valid: true,
                    }
                } else {
                    ProducerRegs {
                        state: ProducerState::HoldingForReady,
                        held: self.held,
                        valid: false,
                    }
                }
            }
            ProducerState::WaitingForAck => {
                if ready_observed {
                    // Handshake commits: the consumer captures from this
                    // same snapshot, so the slot empties here.
                    ProducerRegs {
                        state: ProducerState::Idle,
                        held: Datum::default(),
                        valid: false,
                    }
                } else {
                    ProducerRegs {
                        state: ProducerState::WaitingForAck,
                        held: self.held,
                        valid: true,
                    }
                }
            }
        }
    }
}

impl Default for ProducerRegs {
    fn default() -> Self {
        Self::new()
    }
}
