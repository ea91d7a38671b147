//! Declarative flow configuration.
//!
//! A flow is configured as a read-only table mapping each screen key to a
//! [`ScreenDef`]: the set of events the screen reacts to, each routed to a
//! destination step, plus an opaque render payload the core never inspects.

mod macros;

use crate::core::{Key, Step};
use std::collections::HashMap;

/// One screen's declaration: its routes and its render payload.
///
/// Events are scoped per screen - a screen only reacts to the events
/// declared on it. Each declared event routes to exactly one destination,
/// either another screen or [`Step::Done`].
///
/// The render payload is whatever the caller wants to associate with the
/// screen (a render function, a view id, a template name). The core only
/// hands it back out; it never looks inside.
///
/// # Example
///
/// ```rust
/// use screenflow::config::ScreenDef;
/// use screenflow::core::Step;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Welcome,
///     Dashboard,
/// }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Event {
///     Login,
///     Quit,
///     Other,
/// }
///
/// let def: ScreenDef<Screen, Event, &str> = ScreenDef::new("welcome-view")
///     .to(Event::Login, Screen::Dashboard)
///     .done(Event::Quit);
///
/// assert_eq!(def.route(&Event::Login), Some(&Step::Screen(Screen::Dashboard)));
/// assert_eq!(def.route(&Event::Quit), Some(&Step::Done));
/// assert_eq!(def.route(&Event::Other), None);
/// ```
pub struct ScreenDef<K: Key, E: Key, R> {
    render: R,
    routes: HashMap<E, Step<K>>,
}

impl<K: Key, E: Key, R> ScreenDef<K, E, R> {
    /// Create a screen definition with no routes yet.
    pub fn new(render: R) -> Self {
        Self {
            render,
            routes: HashMap::new(),
        }
    }

    /// Create a screen definition from a pre-built route map.
    ///
    /// Pairs with the [`routes!`](crate::routes) macro.
    pub fn with_routes(render: R, routes: HashMap<E, Step<K>>) -> Self {
        Self { render, routes }
    }

    /// Declare a route from an event to a destination step.
    pub fn on(mut self, event: E, target: Step<K>) -> Self {
        self.routes.insert(event, target);
        self
    }

    /// Declare a route from an event to another screen.
    pub fn to(self, event: E, screen: K) -> Self {
        self.on(event, Step::Screen(screen))
    }

    /// Declare a route from an event to the terminal endpoint.
    pub fn done(self, event: E) -> Self {
        self.on(event, Step::Done)
    }

    /// Look up the destination for an event, or `None` if undeclared.
    pub fn route(&self, event: &E) -> Option<&Step<K>> {
        self.routes.get(event)
    }

    /// All declared routes for this screen.
    pub fn routes(&self) -> &HashMap<E, Step<K>> {
        &self.routes
    }

    /// The opaque render payload.
    pub fn render(&self) -> &R {
        &self.render
    }
}

impl<K: Key, E: Key, R: Clone> Clone for ScreenDef<K, E, R> {
    fn clone(&self) -> Self {
        Self {
            render: self.render.clone(),
            routes: self.routes.clone(),
        }
    }
}

/// The full flow configuration: every screen, keyed by screen key.
///
/// Consumed read-only by the engine and controller. Construct through
/// [`FlowBuilder`](crate::builder::FlowBuilder), which validates the table
/// (no dangling routes, known initial screens) before any dispatch happens.
pub struct FlowConfig<K: Key, E: Key, R> {
    screens: HashMap<K, ScreenDef<K, E, R>>,
}

impl<K: Key, E: Key, R> FlowConfig<K, E, R> {
    /// Construct directly from a pre-built screen map.
    ///
    /// No validation is performed here; prefer the builder, which rejects
    /// dangling routes and unknown initial screens up front. The engine
    /// treats lookups against undeclared screens as no-ops either way.
    pub fn new(screens: HashMap<K, ScreenDef<K, E, R>>) -> Self {
        Self { screens }
    }

    /// Look up one screen's definition.
    pub fn screen(&self, key: &K) -> Option<&ScreenDef<K, E, R>> {
        self.screens.get(key)
    }

    /// Destination for `event` on `key`, or `None` when either the screen
    /// or the event is undeclared.
    pub fn route(&self, key: &K, event: &E) -> Option<&Step<K>> {
        self.screens.get(key).and_then(|def| def.route(event))
    }

    /// Check whether a screen key is declared.
    pub fn contains(&self, key: &K) -> bool {
        self.screens.contains_key(key)
    }

    /// Iterate over declared screen keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.screens.keys()
    }

    /// Number of declared screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Check whether no screens are declared.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl<K: Key, E: Key, R: Clone> Clone for FlowConfig<K, E, R> {
    fn clone(&self) -> Self {
        Self {
            screens: self.screens.clone(),
        }
    }
}
