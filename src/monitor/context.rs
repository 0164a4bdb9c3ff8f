//! Context provided to monitor checks.

use crate::core::{ConsumerState, LinkOutputs, ProducerState, TickInput};

/// Everything a check needs to judge one committed tick.
///
/// `prev` is the snapshot the machines computed from; `curr` is what they
/// committed. Checks judge the pair, so they observe exactly the same
/// one-tick-old values the machines themselves sampled.
#[derive(Clone, Debug)]
pub struct TickContext {
    /// Tick number of the commit under judgment.
    pub tick: u64,
    /// The stimulus sampled for this tick.
    pub input: TickInput,
    /// Registered outputs going into the tick.
    pub prev: LinkOutputs,
    /// Registered outputs committed by the tick.
    pub curr: LinkOutputs,
    /// Producer state going into the tick.
    pub prev_producer: ProducerState,
    /// Producer state committed by the tick.
    pub producer: ProducerState,
    /// Consumer state going into the tick.
    pub prev_consumer: ConsumerState,
    /// Consumer state committed by the tick.
    pub consumer: ConsumerState,
}

impl TickContext {
    /// True when the sampled snapshot satisfied the commit rule (pure).
    pub fn handshake_sampled(&self) -> bool {
        self.prev.handshake()
    }

    /// True when this tick committed a transfer (pure).
    pub fn committed(&self) -> bool {
        self.curr.done
    }

    /// True when the producer carried a datum across this tick, meaning
    /// the held value must not have changed (pure).
    pub fn held_must_be_stable(&self) -> bool {
        let loaded = |state: &ProducerState| {
            matches!(
                state,
                ProducerState::HoldingForReady | ProducerState::WaitingForAck
            )
        };
        loaded(&self.prev_producer) && loaded(&self.producer)
    }
}
