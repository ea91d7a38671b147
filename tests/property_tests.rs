//! Property-based tests for the flow core.
//!
//! These tests use proptest to verify the engine's invariants hold across
//! many randomly generated dispatch sequences.

use proptest::prelude::*;
use screenflow::config::{FlowConfig, ScreenDef};
use screenflow::controller::{reduce, Action, FlowState};
use screenflow::core::{resolve, Hooks, NavStack, Step};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum TestScreen {
    Start,
    Middle,
    End,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum TestEvent {
    GoMid,
    GoEnd,
    GoTerminal,
    Stay,
    Bogus,
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
        ScreenDef::new(())
            .to(TestEvent::GoEnd, TestScreen::End)
            .done(TestEvent::GoTerminal),
    );
    screens.insert(
        TestScreen::End,
        ScreenDef::new(()).done(TestEvent::GoTerminal),
    );
    FlowConfig::new(screens)
}

fn initial() -> FlowState<TestScreen, u32> {
    FlowState {
        history: NavStack::from(vec![Step::Screen(TestScreen::Start)]),
        context: 0,
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..5u8) -> TestEvent {
        match variant {
            0 => TestEvent::GoMid,
            1 => TestEvent::GoEnd,
            2 => TestEvent::GoTerminal,
            3 => TestEvent::Stay,
            _ => TestEvent::Bogus,
        }
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..4u8, event in arbitrary_event()) -> Action<TestEvent, u32> {
        match variant {
            0 | 1 => Action::forward(event),
            2 => Action::Back,
            _ => Action::Reset,
        }
    }
}

proptest! {
    #[test]
    fn terminal_absorbs_every_event(event in arbitrary_event()) {
        let mut transitions = 0;
        let mut exits = 0;
        let mut on_transition = || transitions += 1;
        let mut on_exit = || exits += 1;

        let next = resolve(
            &config(),
            &Step::Done,
            &event,
            Hooks {
                on_transition: Some(&mut on_transition),
                on_exit: Some(&mut on_exit),
            },
        );

        prop_assert_eq!(next, Step::Done);
        prop_assert_eq!(transitions, 0);
        prop_assert_eq!(exits, 0);
    }

    #[test]
    fn resolve_is_deterministic(event in arbitrary_event()) {
        let config = config();
        let current = Step::Screen(TestScreen::Start);

        let first = resolve(&config, &current, &event, Hooks::none());
        let second = resolve(&config, &current, &event, Hooks::none());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn undeclared_events_never_fire_hooks(event in arbitrary_event()) {
        let config = config();
        let current = Step::Screen(TestScreen::Start);
        let declared = config
            .route(&TestScreen::Start, &event)
            .is_some();

        let mut transitions = 0;
        let mut on_transition = || transitions += 1;
        let next = resolve(
            &config,
            &current,
            &event,
            Hooks {
                on_transition: Some(&mut on_transition),
                on_exit: None,
            },
        );

        if declared {
            prop_assert_eq!(transitions, 1);
        } else {
            prop_assert_eq!(transitions, 0);
            prop_assert_eq!(next, current);
        }
    }

    #[test]
    fn history_grows_by_one_iff_step_changes(
        actions in prop::collection::vec(arbitrary_event(), 0..12),
        probe in arbitrary_event(),
    ) {
        let config = config();
        let initial = initial();

        // Drive to an arbitrary reachable state first.
        let mut state = initial.clone();
        for event in actions {
            state = reduce(&config, &initial, &state, Action::forward(event), None);
        }

        let before = state.history.len();
        let current = state.history.peek().cloned();
        let after = reduce(
            &config,
            &initial,
            &state,
            Action::forward(probe.clone()),
            None,
        );

        let resolved = resolve(&config, current.as_ref().unwrap(), &probe, Hooks::none());
        if Some(&resolved) == current.as_ref() {
            prop_assert_eq!(after.history.len(), before);
        } else {
            prop_assert_eq!(after.history.len(), before + 1);
        }
    }

    #[test]
    fn history_never_drops_below_one(
        actions in prop::collection::vec(arbitrary_action(), 0..24),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        for action in actions {
            state = reduce(&config, &initial, &state, action, None);
            prop_assert!(state.history.len() >= 1);
        }
    }

    #[test]
    fn history_root_is_always_the_initial_screen(
        actions in prop::collection::vec(arbitrary_action(), 0..24),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        for action in actions {
            state = reduce(&config, &initial, &state, action, None);
            prop_assert_eq!(
                state.history.entries().first(),
                Some(&Step::Screen(TestScreen::Start))
            );
        }
    }

    #[test]
    fn reset_restores_initial_state_after_any_sequence(
        actions in prop::collection::vec(arbitrary_action(), 0..24),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        for action in actions {
            state = reduce(&config, &initial, &state, action, None);
        }

        let reset = reduce(&config, &initial, &state, Action::Reset, None);
        prop_assert_eq!(reset, initial);
    }

    #[test]
    fn back_leaves_context_untouched(
        steps in prop::collection::vec(arbitrary_event(), 0..8),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        for event in steps {
            state = reduce(
                &config,
                &initial,
                &state,
                Action::forward_with(event, |count: u32| count + 1),
                None,
            );
        }

        let context_before = state.context;
        let back = reduce(&config, &initial, &state, Action::Back, None);
        prop_assert_eq!(back.context, context_before);
    }

    #[test]
    fn context_updates_count_fired_transitions(
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        let mut fired = 0u32;
        for event in events {
            let current = state.history.peek().cloned().unwrap();
            let declared = match &current {
                Step::Screen(key) => config.route(key, &event).is_some(),
                Step::Done => false,
            };
            if declared {
                fired += 1;
            }
            state = reduce(
                &config,
                &initial,
                &state,
                Action::forward_with(event, |count: u32| count + 1),
                None,
            );
        }

        // The updater ran exactly once per fired transition.
        prop_assert_eq!(state.context, fired);
    }

    #[test]
    fn stack_push_pop_round_trips(values in prop::collection::vec(any::<u32>(), 0..16)) {
        let mut stack = NavStack::new();
        for value in &values {
            stack = stack.push(*value);
        }
        prop_assert_eq!(stack.len(), values.len());

        for expected in values.iter().rev() {
            let (rest, popped) = stack.pop();
            prop_assert_eq!(popped, Some(*expected));
            stack = rest;
        }
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn flow_state_serialization_round_trips(
        actions in prop::collection::vec(arbitrary_action(), 0..12),
    ) {
        let config = config();
        let initial = initial();

        let mut state = initial.clone();
        for action in actions {
            state = reduce(&config, &initial, &state, action, None);
        }

        let json = serde_json::to_string(&state).unwrap();
        let decoded: FlowState<TestScreen, u32> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, state);
    }
}
