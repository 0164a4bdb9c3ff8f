//! Monitor rules for committed ticks using Validation.

use crate::core::State;
use crate::monitor::context::TickContext;
use crate::monitor::violations::{ProtocolViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck =
    Box<dyn Fn(&TickContext) -> Validation<(), NonEmptyVec<ProtocolViolation>> + Send + Sync>;

/// Monitor rules applied to every committed tick.
/// Uses Validation to accumulate ALL violations.
pub struct MonitorRules {
    pub(crate) pulse_width: bool,
    pub(crate) commit_rule: bool,
    pub(crate) held_stability: bool,
    pub(crate) required_checks: Vec<ValidationCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl MonitorRules {
    /// Rules with every built-in check enabled and `Halt` on violation.
    ///
    /// This is what the bench installs when no monitor is configured.
    pub fn strict() -> Self {
        Self {
            pulse_width: true,
            commit_rule: true,
            held_stability: true,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Halt,
        }
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if every check passes.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(
        &self,
        context: &TickContext,
    ) -> Validation<(), NonEmptyVec<ProtocolViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ProtocolViolation>>> = Vec::new();

        // done must never stretch across two adjacent ticks
        if self.pulse_width {
            let check = if context.curr.done && context.prev.done {
                Validation::fail(ProtocolViolation::DoubleDonePulse {
                    prev_tick: context.tick.saturating_sub(1),
                    tick: context.tick,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // done iff the sampled snapshot satisfied valid && ready,
        // except that a reset tick aborts without signaling done
        if self.commit_rule {
            let sampled = context.handshake_sampled() && !context.input.reset;
            let check = if context.curr.done && !sampled {
                Validation::fail(ProtocolViolation::DoneWithoutHandshake { tick: context.tick })
            } else if !context.curr.done && sampled {
                Validation::fail(ProtocolViolation::MissingDonePulse { tick: context.tick })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // a held datum is immutable until consumed or reset
        if self.held_stability {
            let check = if context.held_must_be_stable() && context.prev.held != context.curr.held
            {
                Validation::fail(ProtocolViolation::HeldDatumMutated {
                    tick: context.tick,
                    state: context.producer.name().to_string(),
                    was: context.prev.held,
                    now: context.curr.held,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // Run custom checks
        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

impl Default for MonitorRules {
    fn default() -> Self {
        Self::strict()
    }
}
