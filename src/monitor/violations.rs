//! Protocol violations and handling strategies.

use crate::core::Datum;
use thiserror::Error;

/// Deviations from the handshake contract observable at a tick boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProtocolViolation {
    #[error("done asserted on consecutive ticks {prev_tick} and {tick}")]
    DoubleDonePulse { prev_tick: u64, tick: u64 },

    #[error("done asserted at tick {tick} without a sampled valid/ready handshake")]
    DoneWithoutHandshake { tick: u64 },

    #[error("handshake sampled going into tick {tick} but done was not asserted")]
    MissingDonePulse { tick: u64 },

    #[error("held datum changed from {was} to {now} while producer was {state} at tick {tick}")]
    HeldDatumMutated {
        tick: u64,
        state: String,
        was: Datum,
        now: Datum,
    },

    #[error("custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling detected violations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViolationStrategy {
    /// Abort the run at the offending tick.
    Halt,

    /// Record the violation and keep running.
    Record,
}
