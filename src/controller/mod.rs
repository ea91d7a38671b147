//! Stateful flow controller.
//!
//! The controller is the imperative shell around the pure core: it owns
//! the [`FlowState`], funnels every mutation through the [`reduce`]
//! function, and exposes the navigation surface a rendering layer consumes
//! (`forward`/`back`/`reset` plus read accessors).
//!
//! Dispatches are synchronous and run to completion; the controller
//! assumes at most one in-flight dispatch at a time. For cross-thread use,
//! wrap it in whatever single-writer discipline the host already has (a
//! mutex, an actor mailbox, a UI event loop).

mod action;
mod reducer;

pub use action::{Action, ContextUpdate};
pub use reducer::{reduce, FlowState};

use crate::config::FlowConfig;
use crate::core::{Key, NavStack, Step};
use crate::snapshot::{FlowSnapshot, SnapshotError, SNAPSHOT_VERSION};

/// Drives one flow instance: navigation history plus shared context,
/// advanced by dispatching events against the configured routes.
///
/// Construct through [`FlowBuilder`](crate::builder::FlowBuilder).
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
/// #[derive(Clone, Debug)]
/// struct Session {
///     user: Option<String>,
/// }
///
/// let mut flow = FlowBuilder::new()
///     .screen(
///         Screen::Welcome,
///         ScreenDef::new("welcome-view").to(Event::Login, Screen::Dashboard),
///     )
///     .screen(
///         Screen::Dashboard,
///         ScreenDef::new("dashboard-view").done(Event::Logout),
///     )
///     .initial_screen(Screen::Welcome)
///     .initial_context(Session { user: None })
///     .build()
///     .unwrap();
///
/// flow.forward_with(Event::Login, |mut session| {
///     session.user = Some("John".to_string());
///     session
/// });
///
/// assert_eq!(flow.screen_key(), Some(&Screen::Dashboard));
/// assert_eq!(flow.context().user.as_deref(), Some("John"));
/// assert!(flow.can_go_back());
///
/// flow.back();
/// assert_eq!(flow.screen_key(), Some(&Screen::Welcome));
/// ```
pub struct FlowController<K: Key, E: Key, C: Clone, R> {
    config: FlowConfig<K, E, R>,
    initial: FlowState<K, C>,
    state: FlowState<K, C>,
    on_exit: Option<Box<dyn FnMut() + Send>>,
}

impl<K: Key, E: Key, C: Clone, R> FlowController<K, E, C, R> {
    pub(crate) fn new(
        config: FlowConfig<K, E, R>,
        initial: FlowState<K, C>,
        on_exit: Option<Box<dyn FnMut() + Send>>,
    ) -> Self {
        Self {
            config,
            state: initial.clone(),
            initial,
            on_exit,
        }
    }

    /// Dispatch one action through the reducer.
    pub fn dispatch(&mut self, action: Action<E, C>) {
        let on_exit: Option<&mut dyn FnMut()> = match self.on_exit.as_mut() {
            Some(hook) => Some(hook.as_mut()),
            None => None,
        };
        self.state = reduce(&self.config, &self.initial, &self.state, action, on_exit);
    }

    /// Dispatch an event without a context update.
    pub fn forward(&mut self, event: E) {
        self.dispatch(Action::forward(event));
    }

    /// Dispatch an event with a context updater.
    ///
    /// The updater receives an owned clone of the current context and runs
    /// only when a declared transition fires; its return value becomes the
    /// new context.
    pub fn forward_with<F>(&mut self, event: E, update: F)
    where
        F: FnOnce(C) -> C + Send + 'static,
    {
        self.dispatch(Action::forward_with(event, update));
    }

    /// Navigate back one entry. Returns `false` (and does nothing) when
    /// already at the history root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.dispatch(Action::Back);
        true
    }

    /// Restore the initial history and context captured at construction.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// The current step, or `None` if the history is empty (unreachable
    /// for a built flow).
    pub fn current(&self) -> Option<&Step<K>> {
        self.state.history.peek()
    }

    /// The current screen key, or `None` at the terminal endpoint.
    pub fn screen_key(&self) -> Option<&K> {
        self.current().and_then(Step::screen)
    }

    /// Check whether the flow has reached the terminal endpoint.
    pub fn is_done(&self) -> bool {
        matches!(self.current(), Some(step) if step.is_done())
    }

    /// The shared context.
    pub fn context(&self) -> &C {
        &self.state.context
    }

    /// Whether `back()` would navigate.
    pub fn can_go_back(&self) -> bool {
        self.state.history.len() > 1
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.state.history.len()
    }

    /// The navigation history, oldest first.
    pub fn history(&self) -> &NavStack<Step<K>> {
        &self.state.history
    }

    /// The whole flow state.
    pub fn state(&self) -> &FlowState<K, C> {
        &self.state
    }

    /// The read-only flow configuration.
    pub fn config(&self) -> &FlowConfig<K, E, R> {
        &self.config
    }

    /// Render payload of the current screen, or `None` at the terminal
    /// endpoint. The payload is whatever the caller registered; the core
    /// never interprets it.
    pub fn render(&self) -> Option<&R> {
        self.screen_key()
            .and_then(|key| self.config.screen(key))
            .map(|def| def.render())
    }

    /// Capture the current state as a serializable snapshot.
    pub fn snapshot(&self) -> FlowSnapshot<K, C> {
        FlowSnapshot::capture(&self.state)
    }

    /// Replace the flow state from a snapshot.
    ///
    /// The snapshot is validated against this flow's configuration before
    /// anything is swapped: version, non-empty history, and every recorded
    /// screen key must still be declared.
    pub fn restore(&mut self, snapshot: FlowSnapshot<K, C>) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if snapshot.history.is_empty() {
            return Err(SnapshotError::EmptyHistory);
        }
        for step in snapshot.history.iter() {
            if let Step::Screen(key) = step {
                if !self.config.contains(key) {
                    return Err(SnapshotError::UnknownScreen {
                        key: format!("{key:?}"),
                    });
                }
            }
        }

        self.state = FlowState {
            history: snapshot.history,
            context: snapshot.context,
        };
        Ok(())
    }
}
