//! Build errors for bench construction.

use thiserror::Error;

/// Errors that can occur when building a bench.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No stimulus scheduled. Add at least one operation before .build()")]
    EmptySchedule,

    #[error("Deadline of zero ticks can never drain. Use .deadline(n) with n > 0 or omit it")]
    ZeroDeadline,
}
