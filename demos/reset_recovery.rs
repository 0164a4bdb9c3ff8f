//! Reset Recovery
//!
//! This example demonstrates reset mid-transfer: the offer is aborted,
//! nothing is delivered, and both machines return to their initial
//! states within the reset tick.
//!
//! Key concepts:
//! - Level-sensitive reset overrides in-progress work
//! - No done pulse for an aborted transfer
//! - The link is immediately usable again
//!
//! Run with: cargo run --example reset_recovery

use clasp::core::{Datum, Link, State, TickInput};

fn main() {
    println!("=== Reset Recovery ===\n");

    let mut link = Link::new();

    link.tick(&TickInput::send(Datum(0x5A)));
    println!(
        "Offer in flight: producer={} held={}",
        link.producer().state.name(),
        link.producer().held
    );

    let outputs = link.tick(&TickInput::reset());
    println!("\nReset asserted mid-offer:");
    println!(
        "  producer={} consumer={} valid={} done={}",
        link.producer().state.name(),
        link.consumer().state.name(),
        outputs.valid,
        outputs.done
    );
    println!("  held={} captured={} (both cleared)", outputs.held, outputs.captured);

    // The link accepts new work immediately.
    link.tick(&TickInput::send(Datum(0xC3)));
    let committed = link.tick(&TickInput::quiet());
    println!(
        "\nNext transfer after reset: done={} captured={}",
        committed.done, committed.captured
    );

    println!("\nKey Characteristics:");
    println!("- The aborted datum was discarded without a done pulse");
    println!("- No partial-reset state was observable afterwards");
    println!("- The first post-reset transfer behaved like a fresh link");

    println!("\n=== Example Complete ===");
}
