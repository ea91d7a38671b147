//! Screenflow: a declaratively-configured screen-flow state machine
//!
//! Screenflow drives sequential multi-step flows - signup wizards,
//! checkout funnels, onboarding sequences - as a finite-state machine
//! combined with a navigable history stack and a shared context. Each
//! step is a named screen, transitions are named events, and one reserved
//! step ([`Step::Done`](core::Step)) is terminal and absorbing.
//!
//! The core follows a "pure core, imperative shell" split: transition
//! resolution and the history/context reduction are pure functions, while
//! the [`FlowController`](controller::FlowController) owns the state and
//! serializes dispatches.
//!
//! # Core Concepts
//!
//! - **Screens and events**: opaque keys (enums or strings) via the
//!   [`Key`](core::Key) trait
//! - **Routes**: per-screen `event -> destination` declarations, validated
//!   at build time
//! - **History**: immutable navigation log supporting forward/back/reset
//! - **Context**: caller-owned shared value, rewritten only through
//!   explicit updaters when a transition fires
//!
//! # Example
//!
//! ```rust
//! use screenflow::builder::FlowBuilder;
//! use screenflow::config::ScreenDef;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
//! enum Screen {
//!     Welcome,
//!     Dashboard,
//! }
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
//! enum Event {
//!     Login,
//!     Logout,
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Session {
//!     user: Option<String>,
//! }
//!
//! let mut flow = FlowBuilder::new()
//!     .screen(
//!         Screen::Welcome,
//!         ScreenDef::new("welcome-view").to(Event::Login, Screen::Dashboard),
//!     )
//!     .screen(
//!         Screen::Dashboard,
//!         ScreenDef::new("dashboard-view").done(Event::Logout),
//!     )
//!     .initial_screen(Screen::Welcome)
//!     .initial_context(Session { user: None })
//!     .build()
//!     .unwrap();
//!
//! flow.forward_with(Event::Login, |mut session| {
//!     session.user = Some("John".to_string());
//!     session
//! });
//!
//! assert_eq!(flow.screen_key(), Some(&Screen::Dashboard));
//! assert_eq!(flow.render(), Some(&"dashboard-view"));
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, FlowBuilder};
pub use config::{FlowConfig, ScreenDef};
pub use controller::{reduce, Action, ContextUpdate, FlowController, FlowState};
pub use core::{resolve, Hooks, Key, NavStack, Step};
pub use snapshot::{FlowSnapshot, SnapshotError, SNAPSHOT_VERSION};
