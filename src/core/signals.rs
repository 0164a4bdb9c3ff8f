//! Signal-level types shared by both sides of the link.
//!
//! These are the only values that cross the producer/consumer boundary:
//! the datum in flight, the per-tick external stimulus, and the registered
//! monitor view of the coupling wires. Neither machine ever reads the
//! other's internal state directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit value in flight between producer and consumer.
///
/// A datum is owned exclusively by the producer while held, and ownership
/// transfers to the consumer at the instant a handshake commits. The link
/// never buffers more than one.
///
/// # Example
///
/// ```rust
/// use clasp::core::Datum;
///
/// let datum = Datum(0xA5);
/// assert_eq!(datum.value(), 0xA5);
/// assert_eq!(datum.to_string(), "0xa5");
/// assert_eq!(Datum::default(), Datum(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Datum(pub u8);

impl Datum {
    /// The raw 8-bit payload.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl From<u8> for Datum {
    fn from(value: u8) -> Self {
        Datum(value)
    }
}

/// External stimulus sampled for one tick.
///
/// `reset` is level-sensitive and overrides everything else for the tick
/// in which it is sampled. `start` is a trigger that may be held for one
/// tick or longer; `datum` is only captured when `start` is observed with
/// the producer idle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Force both machines back to their reset states this tick.
    pub reset: bool,
    /// Request that a transfer of `datum` begin.
    pub start: bool,
    /// The value to transfer, sampled when `start` is observed.
    pub datum: Datum,
}

impl TickInput {
    /// An all-low input: no reset, no start request.
    pub fn quiet() -> Self {
        Self::default()
    }

    /// A one-tick start request carrying `datum`.
    pub fn send(datum: Datum) -> Self {
        Self {
            reset: false,
            start: true,
            datum,
        }
    }

    /// A one-tick reset request.
    pub fn reset() -> Self {
        Self {
            reset: true,
            start: false,
            datum: Datum::default(),
        }
    }
}

/// The registered signal values visible on the link boundary.
///
/// Every field is a value committed at a tick boundary; observers never
/// see a signal still being computed within the current tick. This is the
/// monitor-facing contract of the link:
///
/// - `valid`: producer's offer flag
/// - `ready`: consumer's accept flag, computed one tick ahead of use
/// - `done`: one-tick pulse marking a committed transfer
/// - `held`: the value the producer currently holds or offers
/// - `captured`: the last value accepted by the consumer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LinkOutputs {
    pub valid: bool,
    pub ready: bool,
    pub done: bool,
    pub held: Datum,
    pub captured: Datum,
}

impl LinkOutputs {
    /// True when the registered wires satisfy the commit rule, meaning a
    /// transfer will commit on the tick that samples this snapshot.
    pub fn handshake(&self) -> bool {
        self.valid && self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_exposes_raw_value() {
        assert_eq!(Datum(0x42).value(), 0x42);
        assert_eq!(Datum::from(0xB7), Datum(0xB7));
    }

    #[test]
    fn datum_displays_as_hex() {
        assert_eq!(Datum(0xA5).to_string(), "0xa5");
        assert_eq!(Datum(0x07).to_string(), "0x07");
    }

    #[test]
    fn quiet_input_drives_nothing() {
        let input = TickInput::quiet();
        assert!(!input.reset);
        assert!(!input.start);
        assert_eq!(input.datum, Datum::default());
    }

    #[test]
    fn send_input_raises_start_with_datum() {
        let input = TickInput::send(Datum(0x11));
        assert!(input.start);
        assert!(!input.reset);
        assert_eq!(input.datum, Datum(0x11));
    }

    #[test]
    fn reset_input_raises_reset_only() {
        let input = TickInput::reset();
        assert!(input.reset);
        assert!(!input.start);
    }

    #[test]
    fn handshake_requires_both_wires() {
        let outputs = LinkOutputs {
            valid: true,
            ready: true,
            done: false,
            held: Datum(0x11),
            captured: Datum::default(),
        };
        assert!(outputs.handshake());

        let no_ready = LinkOutputs {
            ready: false,
            ..outputs
        };
        assert!(!no_ready.handshake());

        let no_valid = LinkOutputs {
            valid: false,
            ..outputs
        };
        assert!(!no_valid.handshake());
    }

    #[test]
    fn signals_roundtrip_through_serde() {
        let input = TickInput::send(Datum(0x5A));
        let json = serde_json::to_string(&input).unwrap();
        let back: TickInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
