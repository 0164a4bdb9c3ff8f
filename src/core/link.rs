//! The coupled producer/consumer pair.
//!
//! `Link` owns both register files and enforces the two-phase update that
//! makes the handshake race-free: every tick, both machines compute their
//! next registers from the same committed snapshot of the previous tick,
//! and the results are committed together at the tick boundary. The
//! producer's view of `ready` and the consumer's view of `valid` are
//! therefore always one-tick-old registered values, never wires still
//! being computed in the current step.

use super::consumer::{ConsumerRegs, ConsumerState};
use super::producer::{ProducerRegs, ProducerState};
use super::signals::{LinkOutputs, TickInput};

/// Next-tick registers computed by [`Link::step`], not yet committed.
///
/// Holding the update as a value keeps the compute and commit phases
/// visibly separate: nothing observes these registers until
/// [`Link::commit`] installs them.
#[derive(Clone, PartialEq, Debug)]
pub struct LinkUpdate {
    pub producer: ProducerRegs,
    pub consumer: ConsumerRegs,
}

/// A single-slot, flow-controlled handshake link.
///
/// A transfer commits on tick *t* precisely when, using the values
/// registered going into *t*, the producer is offering (`valid` high) and
/// the consumer is accepting (`ready` high). Both machines reach that
/// conclusion independently from the shared snapshot.
///
/// # Example
///
/// A start request while the consumer is accepting completes with a
/// `done` pulse on the following tick:
///
/// ```rust
/// use clasp::core::{Datum, Link, TickInput};
///
/// let mut link = Link::new();
///
/// let offered = link.tick(&TickInput::send(Datum(0xA5)));
/// assert!(offered.valid);
/// assert!(!offered.done);
///
/// let committed = link.tick(&TickInput::quiet());
/// assert!(committed.done);
/// assert_eq!(committed.captured, Datum(0xA5));
///
/// let after = link.tick(&TickInput::quiet());
/// assert!(!after.done);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Link {
    producer: ProducerRegs,
    consumer: ConsumerRegs,
}

impl Link {
    /// A link with both machines in their reset states.
    pub fn new() -> Self {
        Self {
            producer: ProducerRegs::new(),
            consumer: ConsumerRegs::new(),
        }
    }

    /// Reassemble a link from captured register files.
    ///
    /// Used when restoring a [`Snapshot`](crate::snapshot::Snapshot); the
    /// registers are committed values, so simulation resumes exactly at
    /// the captured tick boundary.
    pub fn from_regs(producer: ProducerRegs, consumer: ConsumerRegs) -> Self {
        Self { producer, consumer }
    }

    /// The producer's registered state, as committed last tick.
    pub fn producer(&self) -> &ProducerRegs {
        &self.producer
    }

    /// The consumer's registered state, as committed last tick.
    pub fn consumer(&self) -> &ConsumerRegs {
        &self.consumer
    }

    /// The registered monitor view of the coupling wires.
    pub fn outputs(&self) -> LinkOutputs {
        LinkOutputs {
            valid: self.producer.valid,
            ready: self.consumer.ready,
            done: self.consumer.done,
            held: self.producer.held,
            captured: self.consumer.captured,
        }
    }

    /// True when no transfer is held, offered, or pulsing.
    ///
    /// The bench uses this to decide that a drained stimulus schedule has
    /// fully played out.
    pub fn is_quiet(&self) -> bool {
        self.producer.state == ProducerState::Idle
            && self.consumer.state == ConsumerState::Accepting
            && !self.producer.valid
            && !self.consumer.done
    }

    /// Compute next-tick registers from the committed snapshot. Pure.
    ///
    /// The reset guard comes first and short-circuits normal transition
    /// logic: a reset tick forces both machines to their reset registers
    /// and drops any held or in-flight datum without signaling `done`.
    ///
    /// Otherwise the producer steps against the consumer's registered
    /// `ready`, and the consumer steps against the producer's registered
    /// `valid` and held datum - both taken from `self`, the snapshot
    /// committed at the end of the previous tick.
    pub fn step(&self, input: &TickInput) -> LinkUpdate {
        if input.reset {
            return LinkUpdate {
                producer: ProducerRegs::new(),
                consumer: ConsumerRegs::new(),
            };
        }

        let producer = self
            .producer
            .step(input.start, input.datum, self.consumer.ready);
        let consumer = self.consumer.step(self.producer.valid, self.producer.held);

        LinkUpdate { producer, consumer }
    }

    /// Commit a computed update atomically at the tick boundary.
    pub fn commit(&mut self, update: LinkUpdate) {
        self.producer = update.producer;
        self.consumer = update.consumer;
    }

    /// Advance one tick: compute from the snapshot, commit, and return
    /// the freshly registered outputs.
    pub fn tick(&mut self, input: &TickInput) -> LinkOutputs {
        let update = self.step(input);
        self.commit(update);
        self.outputs()
    }

    /// Force both machines to their reset states immediately.
    ///
    /// Equivalent to ticking with `reset` asserted, minus the tick.
    pub fn reset(&mut self) {
        self.producer = ProducerRegs::new();
        self.consumer = ConsumerRegs::new();
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}
