//! Builder API for creating monitor rules.

use crate::monitor::context::TickContext;
use crate::monitor::rules::{MonitorRules, ValidationCheck};
use crate::monitor::violations::{ProtocolViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating monitor rules
pub struct MonitorBuilder {
    pulse_width: bool,
    commit_rule: bool,
    held_stability: bool,
    required_checks: Vec<ValidationCheck>,
    on_violation: ViolationStrategy,
}

impl MonitorBuilder {
    pub fn new() -> Self {
        Self {
            pulse_width: false,
            commit_rule: false,
            held_stability: false,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Halt,
        }
    }

    /// Enable the single-tick done pulse check
    pub fn pulse_width(mut self) -> Self {
        self.pulse_width = true;
        self
    }

    /// Enable the done-iff-sampled-handshake check
    pub fn commit_rule(mut self) -> Self {
        self.commit_rule = true;
        self
    }

    /// Enable the held-datum immutability check
    pub fn held_stability(mut self) -> Self {
        self.held_stability = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TickContext) -> Validation<(), NonEmptyVec<ProtocolViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&TickContext) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &TickContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(ProtocolViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the monitor rules
    pub fn build(self) -> MonitorRules {
        MonitorRules {
            pulse_width: self.pulse_width,
            commit_rule: self.commit_rule,
            held_stability: self.held_stability,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for MonitorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
