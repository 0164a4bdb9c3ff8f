//! Core State trait for handshake machine states.
//!
//! Both sides of the link implement this trait, which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for handshake machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe where a machine sits in its transition cycle.
/// The link is reactive: there is no terminal state, only a designated
/// reset state that a machine re-enters whenever reset is sampled.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for trace recording
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use clasp::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PumpState {
///     Drained,
///     Filling,
///     Full,
/// }
///
/// impl State for PumpState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Drained => "Drained",
///             Self::Filling => "Filling",
///             Self::Full => "Full",
///         }
///     }
///
///     fn reset() -> Self {
///         Self::Drained
///     }
/// }
///
/// assert!(PumpState::Drained.is_reset());
/// assert!(!PumpState::Full.is_reset());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// The single designated state entered on reset.
    ///
    /// Reset is level-sensitive and can be sampled at any tick; every
    /// machine must be able to return here from any reachable state.
    fn reset() -> Self;

    /// Check if this is the reset state.
    ///
    /// Default implementation compares against [`State::reset`].
    fn is_reset(&self) -> bool {
        *self == Self::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Quiet,
        Armed,
        Firing,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Quiet => "Quiet",
                Self::Armed => "Armed",
                Self::Firing => "Firing",
            }
        }

        fn reset() -> Self {
            Self::Quiet
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Quiet.name(), "Quiet");
        assert_eq!(TestState::Armed.name(), "Armed");
        assert_eq!(TestState::Firing.name(), "Firing");
    }

    #[test]
    fn reset_returns_designated_state() {
        assert_eq!(TestState::reset(), TestState::Quiet);
    }

    #[test]
    fn is_reset_identifies_reset_state() {
        assert!(TestState::Quiet.is_reset());
        assert!(!TestState::Armed.is_reset());
        assert!(!TestState::Firing.is_reset());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Armed;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = TestState::Firing;
        let cloned = state.clone();
        assert_eq!(state, cloned);
        assert_ne!(state, TestState::Quiet);
    }
}
