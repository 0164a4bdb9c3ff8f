//! Property-based tests for the handshake link.
//!
//! These tests use proptest to verify the protocol's guarantees hold
//! across many randomly generated stimulus sequences: no datum is lost,
//! commits follow the sampled snapshot, pulses are single-tick, and
//! reset always lands both machines in their initial states.

use clasp::builder::{send_burst, BenchBuilder};
use clasp::core::{ConsumerState, Datum, Link, ProducerState, TickInput};
use clasp::snapshot::Snapshot;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_datum()(value in any::<u8>()) -> Datum {
        Datum(value)
    }
}

prop_compose! {
    fn arbitrary_input()(
        reset in prop::bool::weighted(0.1),
        start in prop::bool::weighted(0.5),
        value in any::<u8>(),
    ) -> TickInput {
        TickInput { reset, start, datum: Datum(value) }
    }
}

prop_compose! {
    fn arbitrary_run()(inputs in prop::collection::vec(arbitrary_input(), 1..64)) -> Vec<TickInput> {
        inputs
    }
}

proptest! {
    // A one-tick start request is never lost, no matter how long the
    // producer has been idle before it: the datum is captured, held as
    // needed, and delivered with a done pulse carrying the same value.
    #[test]
    fn single_pulse_start_is_never_lost(datum in arbitrary_datum(), idle_gap in 0u64..6) {
        let mut link = Link::new();

        // A first transfer leaves the consumer cycling through its busy
        // tick, so the pulse under test can land in any phase.
        link.tick(&TickInput::send(Datum(0x01)));
        link.tick(&TickInput::quiet());

        for _ in 0..idle_gap {
            link.tick(&TickInput::quiet());
        }

        link.tick(&TickInput::send(datum));

        let mut delivered = None;
        for _ in 0..8 {
            let outputs = link.tick(&TickInput::quiet());
            if outputs.done {
                delivered = Some(outputs.captured);
                break;
            }
        }

        prop_assert_eq!(delivered, Some(datum));
    }

    // done is asserted iff the snapshot going into the tick satisfied
    // valid && ready and the tick was not a reset - the commit rule
    // judged against exactly what the machines sampled.
    #[test]
    fn commits_follow_the_sampled_snapshot(inputs in arbitrary_run()) {
        let mut link = Link::new();
        let mut prev = link.outputs();

        for input in &inputs {
            let outputs = link.tick(input);
            let sampled = prev.valid && prev.ready && !input.reset;
            prop_assert_eq!(outputs.done, sampled);
            prev = outputs;
        }
    }

    // done never stretches across two adjacent ticks.
    #[test]
    fn done_pulses_are_single_tick(inputs in arbitrary_run()) {
        let mut link = Link::new();
        let mut prev_done = false;

        for input in &inputs {
            let outputs = link.tick(input);
            prop_assert!(!(prev_done && outputs.done));
            prev_done = outputs.done;
        }
    }

    // With start held low the link stays idle forever: no pulses, no
    // state movement, no output drift.
    #[test]
    fn quiet_input_is_idempotent(ticks in 1usize..100) {
        let mut link = Link::new();
        let baseline = link.outputs();

        for _ in 0..ticks {
            let outputs = link.tick(&TickInput::quiet());
            prop_assert!(!outputs.done);
            prop_assert_eq!(outputs, baseline);
            prop_assert_eq!(&link.producer().state, &ProducerState::Idle);
        }
    }

    // Reset from any reachable state lands both machines in their
    // initial states within the reset tick, with held data gone.
    #[test]
    fn reset_recovers_from_any_reachable_state(inputs in arbitrary_run()) {
        let mut link = Link::new();
        for input in &inputs {
            link.tick(input);
        }

        let outputs = link.tick(&TickInput::reset());

        prop_assert_eq!(&link.producer().state, &ProducerState::Idle);
        prop_assert_eq!(&link.consumer().state, &ConsumerState::Accepting);
        prop_assert!(!outputs.valid);
        prop_assert!(!outputs.done);
        prop_assert_eq!(outputs.held, Datum::default());
        prop_assert_eq!(link.clone(), Link::new());
    }

    // While a datum is held or offered, further start requests cannot
    // change it; the eventual delivery carries the original value.
    #[test]
    fn held_datum_ignores_restart_noise(
        datum in arbitrary_datum(),
        noise in prop::collection::vec((any::<bool>(), any::<u8>()), 1..16),
    ) {
        let mut link = Link::new();

        // Busy the consumer, then capture the datum under test.
        link.tick(&TickInput::send(Datum(0x01)));
        link.tick(&TickInput::quiet());
        link.tick(&TickInput::send(datum));
        prop_assert_eq!(&link.producer().state, &ProducerState::HoldingForReady);

        let mut delivered = None;
        for (start, value) in &noise {
            if link.producer().state != ProducerState::Idle {
                prop_assert_eq!(link.producer().held, datum);
            }
            let input = TickInput {
                reset: false,
                start: *start,
                datum: Datum(*value),
            };
            let outputs = link.tick(&input);
            if outputs.done {
                delivered = Some(outputs.captured);
                break;
            }
        }

        // Drain whatever is still in flight.
        for _ in 0..8 {
            if delivered.is_some() {
                break;
            }
            let outputs = link.tick(&TickInput::quiet());
            if outputs.done {
                delivered = Some(outputs.captured);
            }
        }

        prop_assert_eq!(delivered, Some(datum));
    }

    // A burst of sends delivers every datum, in order, one pulse each.
    #[test]
    fn bursts_deliver_in_order(data in prop::collection::vec(any::<u8>(), 1..6)) {
        let expected: Vec<Datum> = data.iter().map(|b| Datum(*b)).collect();

        let mut bench = BenchBuilder::new()
            .schedule(send_burst(&data))
            .expect_all(&expected)
            .build()
            .unwrap();

        let report = bench.run().unwrap();
        prop_assert!(report.passed);

        let observed: Vec<Datum> = report.deliveries.iter().map(|d| d.datum).collect();
        prop_assert_eq!(observed, expected);
    }

    // A restored snapshot behaves identically to the link it captured.
    #[test]
    fn snapshot_restore_preserves_behavior(
        prefix in arbitrary_run(),
        suffix in arbitrary_run(),
    ) {
        let mut link = Link::new();
        for input in &prefix {
            link.tick(input);
        }

        let snapshot = Snapshot::capture(&link, prefix.len() as u64);
        let bytes = snapshot.to_bytes().unwrap();
        let mut restored = Snapshot::from_bytes(&bytes).unwrap().restore().unwrap();

        for input in &suffix {
            prop_assert_eq!(restored.tick(input), link.tick(input));
        }
        prop_assert_eq!(restored, link);
    }

    // Trace capture is faithful: replaying the recorded inputs through a
    // fresh link reproduces the recorded outputs.
    #[test]
    fn trace_replays_to_the_same_waveform(inputs in arbitrary_run()) {
        use clasp::core::{TickRecord, Trace};

        let mut link = Link::new();
        let mut trace = Trace::new();
        for (tick, input) in inputs.iter().enumerate() {
            let outputs = link.tick(input);
            trace = trace.record(TickRecord {
                tick: tick as u64,
                input: *input,
                outputs,
                producer: link.producer().state.clone(),
                consumer: link.consumer().state.clone(),
            });
        }

        let json = serde_json::to_string(&trace).unwrap();
        let replayed: Trace = serde_json::from_str(&json).unwrap();

        let mut fresh = Link::new();
        for record in replayed.records() {
            let outputs = fresh.tick(&record.input);
            prop_assert_eq!(outputs, record.outputs);
        }
    }
}
