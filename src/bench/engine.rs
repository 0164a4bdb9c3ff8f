//! The bench engine: imperative shell around the pure link core.
//!
//! The bench owns the link, a stimulus driver, monitor rules, a trace and
//! a scoreboard. Each `step` advances exactly one tick: lower the next
//! stimulus, compute and commit the link update, record the waveform,
//! judge the tick, and book any delivery.

use crate::bench::scoreboard::{Delivery, Scoreboard, ScoreboardError};
use crate::bench::stimulus::StimulusDriver;
use crate::core::{
    ConsumerState, Datum, Link, LinkOutputs, ProducerState, TickRecord, Trace, Trigger,
};
use crate::monitor::{MonitorRules, ProtocolViolation, TickContext, ViolationStrategy};
use stillwater::validation::Validation;
use thiserror::Error;

/// Result of advancing the bench by one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The tick committed with nothing notable.
    Advanced,

    /// The tick committed a transfer.
    Delivered { tick: u64, datum: Datum },

    /// The tick broke the handshake contract.
    Violated {
        tick: u64,
        violations: Vec<ProtocolViolation>,
    },

    /// Schedule drained and link quiet; no tick was taken.
    Drained,
}

/// Errors that can end a bench run early.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("deadline of {deadline} ticks exceeded before the schedule drained")]
    DeadlineExceeded { deadline: u64 },

    #[error("run halted by protocol violations at tick {tick}")]
    ViolationHalt {
        tick: u64,
        violations: Vec<ProtocolViolation>,
    },
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct BenchReport {
    /// Total ticks taken.
    pub ticks: u64,
    /// Every committed transfer, in order.
    pub deliveries: Vec<Delivery>,
    /// Violations recorded along the way (empty under `Halt`).
    pub violations: Vec<(u64, ProtocolViolation)>,
    /// Scoreboard mismatches found by the end of the run.
    pub scoreboard_errors: Vec<ScoreboardError>,
    /// True when neither monitor nor scoreboard found anything.
    pub passed: bool,
}

/// Drives a link through a stimulus schedule under monitor rules.
///
/// Construct through [`BenchBuilder`](crate::builder::BenchBuilder).
///
/// # Example
///
/// ```rust
/// use clasp::bench::Stimulus;
/// use clasp::builder::BenchBuilder;
/// use clasp::core::Datum;
///
/// let mut bench = BenchBuilder::new()
///     .stimulus(Stimulus::Send(Datum(0xA5)))
///     .expect(Datum(0xA5))
///     .build()
///     .unwrap();
///
/// let report = bench.run().unwrap();
/// assert!(report.passed);
/// assert_eq!(report.deliveries.len(), 1);
/// ```
pub struct Bench {
    link: Link,
    driver: StimulusDriver,
    monitor: MonitorRules,
    scoreboard: Scoreboard,
    trace: Trace,
    tick: u64,
    deadline: u64,
    prev_outputs: LinkOutputs,
    prev_producer: ProducerState,
    prev_consumer: ConsumerState,
    violations: Vec<(u64, ProtocolViolation)>,
}

impl Bench {
    pub(crate) fn assemble(
        driver: StimulusDriver,
        monitor: MonitorRules,
        scoreboard: Scoreboard,
        deadline: u64,
    ) -> Self {
        let link = Link::new();
        let prev_outputs = link.outputs();
        let prev_producer = link.producer().state.clone();
        let prev_consumer = link.consumer().state.clone();
        Self {
            link,
            driver,
            monitor,
            scoreboard,
            trace: Trace::new(),
            tick: 0,
            deadline,
            prev_outputs,
            prev_producer,
            prev_consumer,
            violations: Vec::new(),
        }
    }

    /// The link under test, as of the last committed tick.
    pub fn link(&self) -> &Link {
        &self.link
    }

    /// Waveform captured so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The scoreboard in its current (possibly unfinished) form.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Number of ticks taken so far.
    pub fn ticks_taken(&self) -> u64 {
        self.tick
    }

    /// True when the schedule has drained and the link is quiet.
    pub fn is_drained(&self) -> bool {
        self.driver.is_drained() && self.link.is_quiet()
    }

    /// Advance exactly one tick.
    ///
    /// Returns [`StepOutcome::Drained`] without taking a tick once the
    /// run has fully played out.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_drained() {
            return StepOutcome::Drained;
        }

        let input = self.driver.next_input(&self.prev_outputs);
        let update = self.link.step(&input);
        self.link.commit(update);
        let outputs = self.link.outputs();
        let producer = self.link.producer().state.clone();
        let consumer = self.link.consumer().state.clone();

        let context = TickContext {
            tick: self.tick,
            input,
            prev: self.prev_outputs,
            curr: outputs,
            prev_producer: self.prev_producer.clone(),
            producer: producer.clone(),
            prev_consumer: self.prev_consumer.clone(),
            consumer: consumer.clone(),
        };
        let verdict = self.monitor.enforce(&context);

        self.trace = self.trace.record(TickRecord {
            tick: self.tick,
            input,
            outputs,
            producer: producer.clone(),
            consumer: consumer.clone(),
        });

        let mut delivered = None;
        if outputs.done {
            self.scoreboard.observe(self.tick, outputs.captured);
            delivered = Some(outputs.captured);
        }

        let tick = self.tick;
        self.tick += 1;
        self.prev_outputs = outputs;
        self.prev_producer = producer;
        self.prev_consumer = consumer;

        match verdict {
            Validation::Failure(errors) => {
                let violations: Vec<ProtocolViolation> = errors.iter().cloned().collect();
                self.violations
                    .extend(violations.iter().map(|v| (tick, v.clone())));
                StepOutcome::Violated { tick, violations }
            }
            Validation::Success(_) => match delivered {
                Some(datum) => StepOutcome::Delivered { tick, datum },
                None => StepOutcome::Advanced,
            },
        }
    }

    /// Run until the schedule drains, the deadline passes, or a
    /// violation halts the run (per the monitor's strategy).
    pub fn run(&mut self) -> Result<BenchReport, BenchError> {
        while !self.is_drained() {
            if self.tick >= self.deadline {
                return Err(BenchError::DeadlineExceeded {
                    deadline: self.deadline,
                });
            }
            if let StepOutcome::Violated { tick, violations } = self.step() {
                if self.monitor.violation_strategy() == ViolationStrategy::Halt {
                    return Err(BenchError::ViolationHalt { tick, violations });
                }
            }
        }
        Ok(self.report())
    }

    /// Step until `trigger` fires on a committed tick, or until `limit`
    /// ticks have been taken. Returns the firing outputs, or `None` if
    /// the run drained or the limit passed first.
    pub fn run_until(
        &mut self,
        trigger: &Trigger<LinkOutputs>,
        limit: u64,
    ) -> Option<LinkOutputs> {
        for _ in 0..limit {
            if self.step() == StepOutcome::Drained {
                return None;
            }
            if trigger.check(&self.prev_outputs) {
                return Some(self.prev_outputs);
            }
        }
        None
    }

    fn report(&mut self) -> BenchReport {
        self.scoreboard.finish();
        let scoreboard_errors = self.scoreboard.errors().to_vec();
        let passed = self.violations.is_empty() && scoreboard_errors.is_empty();
        BenchReport {
            ticks: self.tick,
            deliveries: self.scoreboard.deliveries().to_vec(),
            violations: self.violations.clone(),
            scoreboard_errors,
            passed,
        }
    }
}
