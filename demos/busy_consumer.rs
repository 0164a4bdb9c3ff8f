//! Busy Consumer
//!
//! This example demonstrates the no-loss guarantee: a one-tick start
//! request issued while the consumer is busy is captured and held until
//! the consumer comes back, with no retrigger needed.
//!
//! Key concepts:
//! - Capture-and-hold on a momentary start request
//! - The held datum is immutable until consumed
//! - Delivery happens as soon as ready is observed again
//!
//! Run with: cargo run --example busy_consumer

use clasp::core::{Datum, Link, State, TickInput};

fn main() {
    println!("=== Busy Consumer ===\n");

    let mut link = Link::new();

    // Occupy the consumer with a first transfer.
    link.tick(&TickInput::send(Datum(0x01)));
    let first = link.tick(&TickInput::quiet());
    println!("First transfer committed (captured={})", first.captured);
    println!("Consumer is now busy for one tick; ready={}\n", first.ready);

    // A single-tick request lands exactly in the busy window.
    link.tick(&TickInput::send(Datum(0xB7)));
    println!("One-tick start request with 0xb7 while busy:");
    println!(
        "  producer={} held={} valid={}",
        link.producer().state.name(),
        link.producer().held,
        link.producer().valid
    );

    // No further requests; the link finishes on its own.
    let mut tick = 3;
    loop {
        let outputs = link.tick(&TickInput::quiet());
        println!(
            "Tick {}: producer={} valid={} ready={} done={}",
            tick,
            link.producer().state.name(),
            outputs.valid,
            outputs.ready,
            outputs.done
        );
        if outputs.done {
            println!("\nDelivered {} with no retrigger", outputs.captured);
            break;
        }
        tick += 1;
    }

    println!("\nKey Characteristics:");
    println!("- The momentary request was never lost");
    println!("- The datum stayed immutable across the busy ticks");
    println!("- valid rose only after ready was independently observed");

    println!("\n=== Example Complete ===");
}
