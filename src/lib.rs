//! Clasp: a cycle-accurate valid/ready handshake link simulator
//!
//! Clasp models a single-producer/single-consumer, flow-controlled data
//! transfer: the producer asserts `valid` when it holds a datum, the
//! consumer asserts `ready` when it can accept one, and a transfer
//! commits only on a tick where both held in the same registered
//! snapshot. The crate follows a "pure core, imperative shell" shape:
//! the two machines and their two-phase tick update are pure functions,
//! while the bench (stimulus, scoreboard, trace, monitor) is the
//! imperative shell that drives them.
//!
//! # Core Concepts
//!
//! - **Two-phase tick**: both machines compute from the previous tick's
//!   committed snapshot, then commit together - no same-tick race between
//!   `valid` and `ready` is possible.
//! - **No-loss hold**: a one-tick start request against a busy consumer
//!   captures the datum immediately and holds it until delivered.
//! - **Single-tick pulses**: `done` marks each committed transfer for
//!   exactly one tick.
//!
//! # Example
//!
//! ```rust
//! use clasp::core::{Datum, Link, TickInput};
//!
//! let mut link = Link::new();
//!
//! // One-tick start request while the consumer is accepting.
//! let offered = link.tick(&TickInput::send(Datum(0xA5)));
//! assert!(offered.valid);
//!
//! // The handshake commits on the next tick.
//! let committed = link.tick(&TickInput::quiet());
//! assert!(committed.done);
//! assert_eq!(committed.captured, Datum(0xA5));
//! ```
//!
//! Scheduled runs with pass/fail bookkeeping go through the bench:
//!
//! ```rust
//! use clasp::builder::{send_burst, BenchBuilder};
//! use clasp::core::Datum;
//!
//! let mut bench = BenchBuilder::new()
//!     .schedule(send_burst(&[0x11, 0x22, 0x33]))
//!     .expect_all(&[Datum(0x11), Datum(0x22), Datum(0x33)])
//!     .build()
//!     .unwrap();
//!
//! let report = bench.run().unwrap();
//! assert!(report.passed);
//! ```

pub mod bench;
pub mod builder;
pub mod core;
pub mod monitor;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Datum, Link, LinkOutputs, State, TickInput, Trace};
