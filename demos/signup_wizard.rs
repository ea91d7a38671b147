//! Signup Wizard Flow
//!
//! This example demonstrates a linear multi-step signup flow.
//!
//! Key concepts:
//! - Declarative per-screen routes
//! - Context accumulation across steps
//! - Back navigation without undoing context
//! - Terminal absorption and the exit hook
//!
//! Run with: cargo run --example signup_wizard

use screenflow::builder::FlowBuilder;
use screenflow::config::ScreenDef;
use screenflow::routes;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Screen {
    Welcome,
    Credentials,
    Profile,
    Confirm,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Event {
    Begin,
    Next,
    Submit,
}

#[derive(Clone, Debug, Default)]
struct Signup {
    email: Option<String>,
    display_name: Option<String>,
}

fn main() {
    println!("=== Signup Wizard Flow ===\n");

    let mut flow = FlowBuilder::new()
        .screen(
            Screen::Welcome,
            ScreenDef::new("welcome").to(Event::Begin, Screen::Credentials),
        )
        .screen(
            Screen::Credentials,
            ScreenDef::new("credentials").to(Event::Next, Screen::Profile),
        )
        .screen(
            Screen::Profile,
            ScreenDef::new("profile").to(Event::Next, Screen::Confirm),
        )
        .screen(
            Screen::Confirm,
            ScreenDef::with_routes("confirm", routes! { Event::Submit => @done }),
        )
        .initial_screen(Screen::Welcome)
        .initial_context(Signup::default())
        .on_exit(|| println!("  (exit hook: signup submitted)"))
        .build()
        .expect("flow config is valid");

    println!("Initial screen: {:?}", flow.screen_key());
    println!("Render payload: {:?}\n", flow.render());

    flow.forward(Event::Begin);
    println!("After Begin -> {:?}", flow.screen_key());

    flow.forward_with(Event::Next, |mut signup| {
        signup.email = Some("john@example.com".to_string());
        signup
    });
    println!("After Next  -> {:?}, context: {:?}", flow.screen_key(), flow.context());

    // A stray event for this screen is silently ignored.
    flow.forward(Event::Begin);
    println!("Stray Begin -> {:?} (unchanged)", flow.screen_key());

    // Step back to fix a field; the context survives.
    flow.back();
    println!("After back  -> {:?}, context kept: {:?}", flow.screen_key(), flow.context());

    flow.forward_with(Event::Next, |mut signup| {
        signup.display_name = Some("John".to_string());
        signup
    });
    flow.forward(Event::Submit);

    println!("\nFinished: done = {}", flow.is_done());
    println!(
        "Path taken: {:?}",
        flow.history().iter().collect::<Vec<_>>()
    );

    flow.reset();
    println!("\nAfter reset -> {:?}, depth {}", flow.screen_key(), flow.depth());

    println!("\n=== Example Complete ===");
}
