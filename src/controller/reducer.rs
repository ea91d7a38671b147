//! Pure reducer over flow state.
//!
//! Dispatch is modeled as `(FlowState, Action) -> FlowState`: every
//! operation returns a new state value instead of mutating in place. The
//! only effects are the dispatch hooks, which run synchronously inside
//! the reduction when a declared transition fires.

use crate::config::FlowConfig;
use crate::controller::action::Action;
use crate::core::{resolve, Hooks, Key, NavStack, Step};
use serde::{Deserialize, Serialize};

/// The whole of a flow's mutable state: navigation history plus shared
/// context. Owned exclusively by the controller and replaced wholesale on
/// every dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>"))]
pub struct FlowState<K: Key, C> {
    /// Navigation log, oldest first; the last entry is the current step.
    /// Never empty during normal operation.
    pub history: NavStack<Step<K>>,
    /// Caller-defined shared context, opaque to the engine.
    pub context: C,
}

/// Reduce one action against the current flow state.
///
/// - `Forward` resolves the event through the transition engine. History
///   gains the resolved step only when it differs from the current top,
///   so declared self-routes and no-op dispatches never grow the stack.
///   The context updater runs against a clone of the current context and
///   only when a declared transition actually fires; on a no-op dispatch
///   the context is carried through untouched.
/// - `Back` pops one entry, but never below the history root.
/// - `Reset` restores `initial` wholesale.
///
/// `on_exit` is forwarded to the engine and fires when the resolved step
/// is [`Step::Done`].
pub fn reduce<K: Key, E: Key, C: Clone, R>(
    config: &FlowConfig<K, E, R>,
    initial: &FlowState<K, C>,
    state: &FlowState<K, C>,
    action: Action<E, C>,
    on_exit: Option<&mut dyn FnMut()>,
) -> FlowState<K, C> {
    match action {
        Action::Forward { event, mut update } => {
            let Some(current) = state.history.peek().cloned() else {
                return state.clone();
            };

            let mut pending: Option<C> = None;
            let next = {
                let context = &state.context;
                let mut on_transition = || {
                    if let Some(apply) = update.take() {
                        pending = Some(apply(context.clone()));
                    }
                };
                resolve(
                    config,
                    &current,
                    &event,
                    Hooks {
                        on_transition: Some(&mut on_transition),
                        on_exit,
                    },
                )
            };

            let history = if next != current {
                state.history.push(next)
            } else {
                state.history.clone()
            };
            let context = match pending {
                Some(updated) => updated,
                None => state.context.clone(),
            };

            FlowState { history, context }
        }

        Action::Back => {
            // The history root is never removable.
            if state.history.len() <= 1 {
                return state.clone();
            }
            let (history, _) = state.history.pop();
            FlowState {
                history,
                context: state.context.clone(),
            }
        }

        Action::Reset => initial.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScreenDef;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestScreen {
        Start,
        Middle,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        GoMid,
        GoTerminal,
        Stay,
        Missing,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Ctx {
        user: Option<String>,
    }

    fn config() -> FlowConfig<TestScreen, TestEvent, ()> {
        let mut screens = HashMap::new();
        screens.insert(
            TestScreen::Start,
            ScreenDef::new(())
                .to(TestEvent::GoMid, TestScreen::Middle)
                .to(TestEvent::Stay, TestScreen::Start),
        );
        screens.insert(
            TestScreen::Middle,
            ScreenDef::new(()).done(TestEvent::GoTerminal),
        );
        FlowConfig::new(screens)
    }

    fn initial() -> FlowState<TestScreen, Ctx> {
        FlowState {
            history: NavStack::from(vec![Step::Screen(TestScreen::Start)]),
            context: Ctx { user: None },
        }
    }

    #[test]
    fn forward_pushes_on_state_change() {
        let initial = initial();
        let next = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward(TestEvent::GoMid),
            None,
        );

        assert_eq!(next.history.len(), 2);
        assert_eq!(next.history.peek(), Some(&Step::Screen(TestScreen::Middle)));
        // Input state untouched.
        assert_eq!(initial.history.len(), 1);
    }

    #[test]
    fn forward_on_unknown_event_changes_nothing() {
        let initial = initial();
        let next = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward(TestEvent::Missing),
            None,
        );

        assert_eq!(next, initial);
    }

    #[test]
    fn declared_self_route_does_not_grow_history() {
        let initial = initial();
        let next = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward(TestEvent::Stay),
            None,
        );

        assert_eq!(next.history.len(), 1);
    }

    #[test]
    fn updater_applies_only_when_transition_fires() {
        let initial = initial();

        let fired = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward_with(TestEvent::GoMid, |mut ctx: Ctx| {
                ctx.user = Some("John".to_string());
                ctx
            }),
            None,
        );
        assert_eq!(fired.context.user.as_deref(), Some("John"));

        let ignored = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward_with(TestEvent::Missing, |mut ctx: Ctx| {
                ctx.user = Some("John".to_string());
                ctx
            }),
            None,
        );
        assert_eq!(ignored.context.user, None);
    }

    #[test]
    fn updater_return_value_is_sole_source_of_truth() {
        let initial = initial();
        let next = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward_with(TestEvent::GoMid, |_snapshot: Ctx| Ctx {
                user: Some("replaced".to_string()),
            }),
            None,
        );

        assert_eq!(next.context.user.as_deref(), Some("replaced"));
        // The state the updater was derived from is untouched.
        assert_eq!(initial.context.user, None);
    }

    #[test]
    fn self_route_still_updates_context() {
        let initial = initial();
        let next = reduce(
            &config(),
            &initial,
            &initial,
            Action::forward_with(TestEvent::Stay, |mut ctx: Ctx| {
                ctx.user = Some("still-here".to_string());
                ctx
            }),
            None,
        );

        assert_eq!(next.history.len(), 1);
        assert_eq!(next.context.user.as_deref(), Some("still-here"));
    }

    #[test]
    fn back_pops_one_entry() {
        let config = config();
        let initial = initial();
        let mid = reduce(
            &config,
            &initial,
            &initial,
            Action::forward(TestEvent::GoMid),
            None,
        );

        let back = reduce(&config, &initial, &mid, Action::Back, None);
        assert_eq!(back.history.len(), 1);
        assert_eq!(back.history.peek(), Some(&Step::Screen(TestScreen::Start)));
    }

    #[test]
    fn back_never_pops_the_root() {
        let initial = initial();
        let mut state = initial.clone();
        for _ in 0..5 {
            state = reduce(&config(), &initial, &state, Action::Back, None);
        }
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn back_leaves_context_alone() {
        let config = config();
        let initial = initial();
        let mid = reduce(
            &config,
            &initial,
            &initial,
            Action::forward_with(TestEvent::GoMid, |mut ctx: Ctx| {
                ctx.user = Some("John".to_string());
                ctx
            }),
            None,
        );

        let back = reduce(&config, &initial, &mid, Action::Back, None);
        assert_eq!(back.context.user.as_deref(), Some("John"));
    }

    #[test]
    fn reset_restores_initial_state() {
        let config = config();
        let initial = initial();
        let mut state = reduce(
            &config,
            &initial,
            &initial,
            Action::forward_with(TestEvent::GoMid, |mut ctx: Ctx| {
                ctx.user = Some("John".to_string());
                ctx
            }),
            None,
        );
        state = reduce(
            &config,
            &initial,
            &state,
            Action::forward(TestEvent::GoTerminal),
            None,
        );

        let reset = reduce(&config, &initial, &state, Action::Reset, None);
        assert_eq!(reset, initial);
    }

    #[test]
    fn on_exit_fires_when_reaching_done() {
        let config = config();
        let initial = initial();
        let mid = reduce(
            &config,
            &initial,
            &initial,
            Action::forward(TestEvent::GoMid),
            None,
        );

        let mut exits = 0;
        let mut on_exit = || exits += 1;
        let done = reduce(
            &config,
            &initial,
            &mid,
            Action::forward(TestEvent::GoTerminal),
            Some(&mut on_exit),
        );

        assert_eq!(exits, 1);
        assert_eq!(done.history.peek(), Some(&Step::Done));
    }

    #[test]
    fn dispatch_at_done_is_absorbed() {
        let config = config();
        let initial = initial();
        let mut state = reduce(
            &config,
            &initial,
            &initial,
            Action::forward(TestEvent::GoMid),
            None,
        );
        state = reduce(
            &config,
            &initial,
            &state,
            Action::forward(TestEvent::GoTerminal),
            None,
        );
        let depth = state.history.len();

        let mut exits = 0;
        let mut on_exit = || exits += 1;
        let after = reduce(
            &config,
            &initial,
            &state,
            Action::forward(TestEvent::GoMid),
            Some(&mut on_exit),
        );

        assert_eq!(after.history.len(), depth);
        assert_eq!(after.history.peek(), Some(&Step::Done));
        assert_eq!(exits, 0);
    }

    #[test]
    fn empty_history_forward_is_a_no_op() {
        // Unreachable through the builder, but the reducer is total.
        let empty = FlowState {
            history: NavStack::new(),
            context: Ctx { user: None },
        };
        let next = reduce(
            &config(),
            &empty,
            &empty,
            Action::forward(TestEvent::GoMid),
            None,
        );
        assert_eq!(next, empty);
    }
}
