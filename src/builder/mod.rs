//! Builder API for ergonomic bench construction.
//!
//! This module provides a fluent builder and schedule helpers for
//! standing up benches with minimal boilerplate while keeping the
//! schedule/expectation bookkeeping in one place.

pub mod bench;
pub mod error;

pub use bench::BenchBuilder;
pub use error::BuildError;

use crate::bench::Stimulus;
use crate::core::Datum;

/// Build a back-to-back schedule: one `Send` per byte, each waiting for
/// its delivery before the next begins.
///
/// # Example
///
/// ```
/// use clasp::builder::{send_burst, BenchBuilder};
/// use clasp::core::Datum;
///
/// let mut bench = BenchBuilder::new()
///     .schedule(send_burst(&[0x11, 0x22, 0x33]))
///     .expect_all(&[Datum(0x11), Datum(0x22), Datum(0x33)])
///     .build()
///     .unwrap();
///
/// assert!(bench.run().unwrap().passed);
/// ```
pub fn send_burst(data: &[u8]) -> Vec<Stimulus> {
    data.iter().map(|byte| Stimulus::Send(Datum(*byte))).collect()
}

/// Build a schedule of sends separated by fixed idle gaps.
///
/// # Example
///
/// ```
/// use clasp::bench::Stimulus;
/// use clasp::builder::spaced_sends;
/// use clasp::core::Datum;
///
/// let schedule = spaced_sends(&[0x11, 0x22], 4);
/// assert_eq!(
///     schedule,
///     vec![
///         Stimulus::Send(Datum(0x11)),
///         Stimulus::Pause(4),
///         Stimulus::Send(Datum(0x22)),
///     ]
/// );
/// ```
pub fn spaced_sends(data: &[u8], gap: u64) -> Vec<Stimulus> {
    let mut schedule = Vec::new();
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            schedule.push(Stimulus::Pause(gap));
        }
        schedule.push(Stimulus::Send(Datum(*byte)));
    }
    schedule
}
