//! Snapshot and Resume
//!
//! This example demonstrates capturing a flow mid-way and resuming it in
//! a freshly built flow, as a long-lived wizard would across restarts.
//!
//! Key concepts:
//! - JSON and binary snapshot encodings
//! - Restore validation against the flow's configuration
//!
//! Run with: cargo run --example snapshot_resume

use screenflow::builder::FlowBuilder;
use screenflow::config::ScreenDef;
use screenflow::snapshot::FlowSnapshot;
use screenflow::FlowController;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Screen {
    Cart,
    Shipping,
    Payment,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Event {
    Checkout,
    Pay,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Order {
    items: u32,
    address: Option<String>,
}

fn build_flow() -> FlowController<Screen, Event, Order, &'static str> {
    FlowBuilder::new()
        .screen(
            Screen::Cart,
            ScreenDef::new("cart").to(Event::Checkout, Screen::Shipping),
        )
        .screen(
            Screen::Shipping,
            ScreenDef::new("shipping").to(Event::Pay, Screen::Payment),
        )
        .screen(Screen::Payment, ScreenDef::new("payment").done(Event::Done))
        .initial_screen(Screen::Cart)
        .initial_context(Order::default())
        .build()
        .expect("flow config is valid")
}

fn main() {
    println!("=== Snapshot and Resume ===\n");

    let mut flow = build_flow();
    flow.forward_with(Event::Checkout, |mut order| {
        order.items = 3;
        order.address = Some("12 Main St".to_string());
        order
    });
    println!("Mid-flow at {:?}, context {:?}", flow.screen_key(), flow.context());

    // Capture and encode, as a host app would before shutting down.
    let snapshot = flow.snapshot();
    let json = snapshot.to_json().expect("snapshot serializes");
    let bytes = snapshot.to_bytes().expect("snapshot serializes");
    println!("\nSnapshot id: {}", snapshot.id);
    println!("JSON bytes: {}, binary bytes: {}", json.len(), bytes.len());

    // Later: a fresh process rebuilds the flow and resumes.
    let decoded: FlowSnapshot<Screen, Order> =
        FlowSnapshot::from_json(&json).expect("snapshot decodes");

    let mut resumed = build_flow();
    resumed.restore(decoded).expect("snapshot matches the flow");
    println!(
        "\nResumed at {:?}, depth {}, context {:?}",
        resumed.screen_key(),
        resumed.depth(),
        resumed.context()
    );

    resumed.forward(Event::Pay);
    resumed.forward(Event::Done);
    println!("Flow finished: {}", resumed.is_done());

    println!("\n=== Example Complete ===");
}
