//! Trigger predicates over observed link outputs.
//!
//! Triggers are pure boolean functions that decide when a run condition
//! has been met. They let the bench express "run until" conditions
//! declaratively without side effects.

use std::marker::PhantomData;

/// Pure predicate that decides whether an observation fires a condition.
///
/// Triggers are evaluated against committed values only, so a trigger can
/// never observe a signal mid-computation.
///
/// # Example
///
/// ```rust
/// use clasp::core::{Datum, LinkOutputs, Trigger};
///
/// // Fire on any committed transfer.
/// let on_done = Trigger::new(|outputs: &LinkOutputs| outputs.done);
///
/// let quiet = LinkOutputs {
///     valid: false,
///     ready: true,
///     done: false,
///     held: Datum::default(),
///     captured: Datum::default(),
/// };
/// assert!(!on_done.check(&quiet));
///
/// let committed = LinkOutputs { done: true, ..quiet };
/// assert!(on_done.check(&committed));
/// ```
pub struct Trigger<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<T>,
}

impl<T> Trigger<T> {
    /// Create a trigger from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Trigger {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check whether the observation fires this trigger.
    pub fn check(&self, observed: &T) -> bool {
        (self.predicate)(observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signals::{Datum, LinkOutputs};

    fn quiet_outputs() -> LinkOutputs {
        LinkOutputs {
            valid: false,
            ready: true,
            done: false,
            held: Datum::default(),
            captured: Datum::default(),
        }
    }

    #[test]
    fn trigger_fires_on_matching_observation() {
        let on_done = Trigger::new(|outputs: &LinkOutputs| outputs.done);

        assert!(!on_done.check(&quiet_outputs()));
        assert!(on_done.check(&LinkOutputs {
            done: true,
            ..quiet_outputs()
        }));
    }

    #[test]
    fn trigger_is_deterministic() {
        let outputs = quiet_outputs();
        let trigger = Trigger::new(|o: &LinkOutputs| o.ready);

        let result1 = trigger.check(&outputs);
        let result2 = trigger.check(&outputs);

        assert_eq!(result1, result2);
    }

    #[test]
    fn trigger_can_match_specific_payloads() {
        let on_a5 = Trigger::new(|o: &LinkOutputs| o.done && o.captured == Datum(0xA5));

        assert!(on_a5.check(&LinkOutputs {
            done: true,
            captured: Datum(0xA5),
            ..quiet_outputs()
        }));
        assert!(!on_a5.check(&LinkOutputs {
            done: true,
            captured: Datum(0x11),
            ..quiet_outputs()
        }));
    }

    #[test]
    fn trigger_works_over_arbitrary_types() {
        let over_ten = Trigger::new(|n: &u64| *n > 10);
        assert!(over_ten.check(&11));
        assert!(!over_ten.check(&10));
    }
}
