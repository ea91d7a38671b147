//! Dispatchable flow actions.

use std::fmt;

/// Caller-supplied context updater applied when a transition fires.
///
/// The updater receives an owned snapshot of the current context and must
/// return the new context value. The return value - not anything the
/// updater did along the way - becomes the stored context.
pub type ContextUpdate<C> = Box<dyn FnOnce(C) -> C + Send>;

/// One dispatch against a flow's state.
///
/// Mirrors the three navigation operations: move forward on an event
/// (optionally rewriting the context), step back, or reset to the initial
/// state captured at construction.
pub enum Action<E, C> {
    /// Dispatch an event, optionally rewriting the context when a
    /// declared transition fires.
    Forward {
        event: E,
        update: Option<ContextUpdate<C>>,
    },
    /// Pop the most recent history entry. No-op at the history root.
    Back,
    /// Restore the initial history and context wholesale.
    Reset,
}

impl<E: fmt::Debug, C> fmt::Debug for Action<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward { event, update } => f
                .debug_struct("Forward")
                .field("event", event)
                .field("update", &update.is_some())
                .finish(),
            Self::Back => write!(f, "Back"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

impl<E, C> Action<E, C> {
    /// Forward dispatch without a context update.
    pub fn forward(event: E) -> Self {
        Self::Forward {
            event,
            update: None,
        }
    }

    /// Forward dispatch with a context updater.
    pub fn forward_with<F>(event: E, update: F) -> Self
    where
        F: FnOnce(C) -> C + Send + 'static,
    {
        Self::Forward {
            event,
            update: Some(Box::new(update)),
        }
    }
}
