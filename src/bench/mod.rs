//! The test-driver collaborator around the pure link core.
//!
//! The bench owns tick generation: it lowers a stimulus schedule into
//! per-tick inputs, drives the link, captures the waveform, enforces
//! monitor rules, and books deliveries against expectations. Nothing in
//! `core` depends on anything here.
//!
//! # Key Concepts
//!
//! - **Stimulus**: high-level schedule operations lowered to tick inputs
//! - **Scoreboard**: expected-vs-observed delivery bookkeeping
//! - **Bench**: executes the run and reports a pass/fail verdict

mod engine;
mod scoreboard;
mod stimulus;

pub use engine::{Bench, BenchError, BenchReport, StepOutcome};
pub use scoreboard::{Delivery, Scoreboard, ScoreboardError};
pub use stimulus::{Stimulus, StimulusDriver};
