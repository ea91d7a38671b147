//! Builder API for ergonomic flow construction.
//!
//! This module provides a fluent builder for declaring a flow's screens,
//! routes, initial history, and shared context with minimal boilerplate.
//! `build()` validates the whole configuration up front, so a flow that
//! builds can never hit a malformed route at dispatch time.

pub mod error;

pub use error::BuildError;

use crate::config::{FlowConfig, ScreenDef};
use crate::controller::{FlowController, FlowState};
use crate::core::{Key, NavStack, Step};
use std::collections::HashMap;

/// Builder for constructing a [`FlowController`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use screenflow::builder::FlowBuilder;
/// use screenflow::config::ScreenDef;
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
///     Logout,
/// }
///
/// let flow = FlowBuilder::new()
///     .screen(
///         Screen::Welcome,
///         ScreenDef::new("welcome-view").to(Event::Login, Screen::Dashboard),
///     )
///     .screen(
///         Screen::Dashboard,
///         ScreenDef::new("dashboard-view").done(Event::Logout),
///     )
///     .initial_screen(Screen::Welcome)
///     .initial_context(0u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(flow.screen_key(), Some(&Screen::Welcome));
/// ```
pub struct FlowBuilder<K: Key, E: Key, C, R> {
    screens: HashMap<K, ScreenDef<K, E, R>>,
    duplicate: Option<K>,
    initial: Option<Vec<K>>,
    context: Option<C>,
    on_exit: Option<Box<dyn FnMut() + Send>>,
}

impl<K: Key, E: Key, C: Clone, R> FlowBuilder<K, E, C, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
            duplicate: None,
            initial: None,
            context: None,
            on_exit: None,
        }
    }

    /// Declare a screen. Each key may be declared once; duplicates are
    /// reported by `build()`.
    pub fn screen(mut self, key: K, def: ScreenDef<K, E, R>) -> Self {
        if self.screens.contains_key(&key) {
            self.duplicate.get_or_insert(key);
        } else {
            self.screens.insert(key, def);
        }
        self
    }

    /// Set the single initial screen (required unless `initial_history`
    /// is used instead).
    pub fn initial_screen(mut self, key: K) -> Self {
        self.initial = Some(vec![key]);
        self
    }

    /// Pre-seed the navigation history with an ordered sequence of
    /// screens, oldest first. The last entry becomes the current screen.
    pub fn initial_history(mut self, keys: Vec<K>) -> Self {
        self.initial = Some(keys);
        self
    }

    /// Set the initial shared context (required).
    pub fn initial_context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Register a callback invoked whenever the flow reaches the terminal
    /// endpoint from any screen (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Validate the configuration and build the controller.
    ///
    /// Validation covers everything that would otherwise surface as
    /// undefined behavior at dispatch time: missing/unknown initial
    /// screens, duplicate declarations, and routes that target screens
    /// never declared.
    pub fn build(self) -> Result<FlowController<K, E, C, R>, BuildError> {
        if self.screens.is_empty() {
            return Err(BuildError::NoScreens);
        }

        if let Some(key) = self.duplicate {
            return Err(BuildError::DuplicateScreen {
                key: format!("{key:?}"),
            });
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialScreen)?;
        if initial.is_empty() {
            return Err(BuildError::EmptyInitialHistory);
        }
        for key in &initial {
            if !self.screens.contains_key(key) {
                return Err(BuildError::UnknownInitialScreen {
                    key: format!("{key:?}"),
                });
            }
        }

        for (from, def) in &self.screens {
            for target in def.routes().values() {
                if let Step::Screen(to) = target {
                    if !self.screens.contains_key(to) {
                        return Err(BuildError::DanglingRoute {
                            from: format!("{from:?}"),
                            to: format!("{to:?}"),
                        });
                    }
                }
            }
        }

        let context = self.context.ok_or(BuildError::MissingInitialContext)?;

        let history = NavStack::from(initial.into_iter().map(Step::Screen).collect::<Vec<_>>());
        let state = FlowState { history, context };

        Ok(FlowController::new(
            FlowConfig::new(self.screens),
            state,
            self.on_exit,
        ))
    }
}

impl<K: Key, E: Key, C: Clone, R> Default for FlowBuilder<K, E, C, R> {
    fn default() -> Self {
        Self::new()
    }
}
