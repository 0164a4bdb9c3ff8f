//! Core handshake machinery.
//!
//! This module contains the pure functional core of the link:
//! - State definitions via the `State` trait
//! - The producer and consumer register files and their transition logic
//! - The coupled `Link` with its two-phase tick update
//! - Trace capture and trigger predicates
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy: the bench drives these
//! functions; nothing here performs I/O or blocks.

mod consumer;
mod link;
mod producer;
mod signals;
mod state;
mod trace;
mod trigger;

pub use consumer::{ConsumerRegs, ConsumerState};
pub use link::{Link, LinkUpdate};
pub use producer::{ProducerRegs, ProducerState};
pub use signals::{Datum, LinkOutputs, TickInput};
pub use state::State;
pub use trace::{TickRecord, Trace};
pub use trigger::Trigger;
