//! Pure transition resolution.
//!
//! [`resolve`] computes the next step from the configured routes, the
//! current step, and a dispatched event. It is stateless, so one config
//! can serve any number of independent flows.

use crate::config::FlowConfig;
use crate::core::{Key, Step};

/// Optional per-dispatch callbacks fired by [`resolve`].
///
/// Hooks are optional function values - absence means nothing fires. Both
/// run synchronously inside the `resolve` call, and only when a declared
/// route actually matches: `on_transition` first, then `on_exit` if the
/// destination is [`Step::Done`].
#[derive(Default)]
pub struct Hooks<'t, 'x> {
    /// Fired exactly once when a declared route matches the event.
    pub on_transition: Option<&'t mut (dyn FnMut() + 't)>,
    /// Fired exactly once, after `on_transition`, when the matched route
    /// leads to the terminal endpoint.
    pub on_exit: Option<&'x mut (dyn FnMut() + 'x)>,
}

impl Hooks<'_, '_> {
    /// Hooks with neither callback present.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Resolve the next step for `event` dispatched at `current`.
///
/// - At [`Step::Done`] the flow is absorbed: the result is `Done`, no
///   lookup is performed and no hook fires.
/// - When `current` has no declared route for `event` (including the case
///   where `current` is missing from the table entirely), the result is
///   `current` unchanged and no hook fires. Silent-ignore is deliberate:
///   stray events are part of normal UI operation, not errors.
/// - Otherwise the declared destination is returned after firing
///   `on_transition`, then `on_exit` if the destination is `Done`.
///
/// # Example
///
/// ```rust
/// use screenflow::builder::FlowBuilder;
/// use screenflow::config::ScreenDef;
/// use screenflow::core::{resolve, Hooks, Step};
///
/// let flow = FlowBuilder::new()
///     .screen(
///         "start".to_string(),
///         ScreenDef::new(()).to("next".to_string(), "end".to_string()),
///     )
///     .screen(
///         "end".to_string(),
///         ScreenDef::new(()).done("finish".to_string()),
///     )
///     .initial_screen("start".to_string())
///     .initial_context(())
///     .build()
///     .unwrap();
///
/// let next = resolve(
///     flow.config(),
///     &Step::Screen("start".to_string()),
///     &"next".to_string(),
///     Hooks::none(),
/// );
/// assert_eq!(next, Step::Screen("end".to_string()));
///
/// // Unknown events resolve to the current step unchanged.
/// let same = resolve(
///     flow.config(),
///     &Step::Screen("start".to_string()),
///     &"bogus".to_string(),
///     Hooks::none(),
/// );
/// assert_eq!(same, Step::Screen("start".to_string()));
/// ```
pub fn resolve<K: Key, E: Key, R>(
    config: &FlowConfig<K, E, R>,
    current: &Step<K>,
    event: &E,
    hooks: Hooks<'_, '_>,
) -> Step<K> {
    // Nothing to be done once the flow is at the terminal endpoint.
    let Step::Screen(key) = current else {
        return Step::Done;
    };

    // No declared route for this event on this screen.
    let Some(next) = config.route(key, event) else {
        return current.clone();
    };

    let Hooks {
        on_transition,
        on_exit,
    } = hooks;

    if let Some(hook) = on_transition {
        hook();
    }
    if next.is_done() {
        if let Some(hook) = on_exit {
            hook();
        }
    }

    next.clone()
}
