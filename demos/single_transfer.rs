//! Single Transfer
//!
//! This example demonstrates the fast path of the handshake: a start
//! request issued while the consumer is accepting.
//!
//! Key concepts:
//! - One-tick start request carrying a datum
//! - The transfer commits on the tick after the offer
//! - done pulses for exactly one tick
//!
//! Run with: cargo run --example single_transfer

use clasp::core::{Datum, Link, TickInput};

fn main() {
    println!("=== Single Transfer ===\n");

    let mut link = Link::new();
    println!("Link created; producer Idle, consumer Accepting\n");

    let offered = link.tick(&TickInput::send(Datum(0xA5)));
    println!("Tick 0: start request with 0xa5");
    println!("  valid={} ready={} done={}", offered.valid, offered.ready, offered.done);

    let committed = link.tick(&TickInput::quiet());
    println!("Tick 1: quiet");
    println!(
        "  valid={} ready={} done={} captured={}",
        committed.valid, committed.ready, committed.done, committed.captured
    );

    let after = link.tick(&TickInput::quiet());
    println!("Tick 2: quiet");
    println!("  done={} (pulse is one tick wide)\n", after.done);

    println!("Key Characteristics:");
    println!("- The producer offered on the tick after the request");
    println!("- The handshake committed against registered values only");
    println!("- done marked the commit for exactly one tick");

    println!("\n=== Example Complete ===");
}
