//! Builder for constructing benches.

use crate::bench::{Bench, Scoreboard, Stimulus, StimulusDriver};
use crate::builder::error::BuildError;
use crate::core::Datum;
use crate::monitor::MonitorRules;

/// Builder for constructing benches with a fluent API.
pub struct BenchBuilder {
    schedule: Vec<Stimulus>,
    expected: Vec<Datum>,
    monitor: Option<MonitorRules>,
    deadline: Option<u64>,
}

impl BenchBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            schedule: Vec::new(),
            expected: Vec::new(),
            monitor: None,
            deadline: None,
        }
    }

    /// Append one stimulus operation.
    pub fn stimulus(mut self, op: Stimulus) -> Self {
        self.schedule.push(op);
        self
    }

    /// Append multiple stimulus operations at once.
    pub fn schedule(mut self, ops: Vec<Stimulus>) -> Self {
        self.schedule.extend(ops);
        self
    }

    /// Expect one delivery, in order.
    pub fn expect(mut self, datum: Datum) -> Self {
        self.expected.push(datum);
        self
    }

    /// Expect a sequence of deliveries, in order.
    pub fn expect_all(mut self, data: &[Datum]) -> Self {
        self.expected.extend_from_slice(data);
        self
    }

    /// Install monitor rules (defaults to [`MonitorRules::strict`]).
    pub fn monitor(mut self, rules: MonitorRules) -> Self {
        self.monitor = Some(rules);
        self
    }

    /// Cap the run at `ticks` ticks (defaults to a bound derived from
    /// the schedule).
    pub fn deadline(mut self, ticks: u64) -> Self {
        self.deadline = Some(ticks);
        self
    }

    /// Build the bench.
    /// Returns an error if the schedule is empty or the deadline is zero.
    pub fn build(self) -> Result<Bench, BuildError> {
        if self.schedule.is_empty() {
            return Err(BuildError::EmptySchedule);
        }
        if self.deadline == Some(0) {
            return Err(BuildError::ZeroDeadline);
        }

        let deadline = self
            .deadline
            .unwrap_or_else(|| default_deadline(&self.schedule));
        let monitor = self.monitor.unwrap_or_else(MonitorRules::strict);
        let mut scoreboard = Scoreboard::new();
        scoreboard.expect_all(&self.expected);

        Ok(Bench::assemble(
            StimulusDriver::new(self.schedule),
            monitor,
            scoreboard,
            deadline,
        ))
    }
}

impl Default for BenchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A tick allowance generous enough for any well-formed schedule: the
/// slowest transfer needs a handful of ticks, pauses add their length,
/// and a fixed tail covers drain.
fn default_deadline(schedule: &[Stimulus]) -> u64 {
    let per_op: u64 = schedule
        .iter()
        .map(|op| match op {
            Stimulus::Send(_) | Stimulus::Fire(_) => 8,
            Stimulus::Pause(ticks) => ticks + 1,
            Stimulus::Reset => 2,
        })
        .sum();
    per_op + 16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Link;

    #[test]
    fn builder_rejects_empty_schedule() {
        let result = BenchBuilder::new().build();
        assert!(matches!(result, Err(BuildError::EmptySchedule)));
    }

    #[test]
    fn builder_rejects_zero_deadline() {
        let result = BenchBuilder::new()
            .stimulus(Stimulus::Send(Datum(0x01)))
            .deadline(0)
            .build();
        assert!(matches!(result, Err(BuildError::ZeroDeadline)));
    }

    #[test]
    fn fluent_api_builds_bench() {
        let bench = BenchBuilder::new()
            .stimulus(Stimulus::Send(Datum(0x01)))
            .stimulus(Stimulus::Pause(2))
            .expect(Datum(0x01))
            .deadline(32)
            .build();

        assert!(bench.is_ok());
        let bench = bench.unwrap();
        assert_eq!(bench.link(), &Link::new());
        assert_eq!(bench.ticks_taken(), 0);
    }

    #[test]
    fn schedule_appends_in_order() {
        let mut bench = BenchBuilder::new()
            .schedule(vec![Stimulus::Pause(1), Stimulus::Send(Datum(0x11))])
            .stimulus(Stimulus::Send(Datum(0x22)))
            .expect_all(&[Datum(0x11), Datum(0x22)])
            .build()
            .unwrap();

        let report = bench.run().unwrap();
        assert!(report.passed);
        assert_eq!(report.deliveries.len(), 2);
    }

    #[test]
    fn default_deadline_scales_with_pauses() {
        let short = default_deadline(&[Stimulus::Send(Datum(0x01))]);
        let long = default_deadline(&[Stimulus::Send(Datum(0x01)), Stimulus::Pause(100)]);
        assert!(long > short + 100);
    }
}
