//! Validation-based invariant monitoring for committed ticks.
//!
//! This module checks every committed tick against the handshake
//! contract using Stillwater's `Validation` type to accumulate ALL
//! violations instead of fail-fast behavior.
//!
//! # Philosophy
//!
//! Following Stillwater's philosophy: "Don't stop at first error - collect them all!"
//!
//! A tick that breaks the contract usually breaks it in more than one way
//! (a stretched `done` pulse also violates the commit rule). Fail-fast
//! checking would surface one symptom per run; `Validation` reports the
//! whole picture in a single pass.
//!
//! # Example
//!
//! ```rust
//! use clasp::monitor::{MonitorBuilder, MonitorRules, ViolationStrategy};
//!
//! let rules: MonitorRules = MonitorBuilder::new()
//!     .pulse_width()
//!     .commit_rule()
//!     .held_stability()
//!     .on_violation(ViolationStrategy::Record)
//!     .build();
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::MonitorBuilder;
pub use context::TickContext;
pub use rules::MonitorRules;
pub use violations::{ProtocolViolation, ViolationStrategy};
