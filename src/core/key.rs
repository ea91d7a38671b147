//! Key types for screens and events.
//!
//! Screens and events are identified by opaque, comparable keys. Any type
//! that is cloneable, hashable, and serializable can serve as a key, so
//! flows are usually keyed by small enums or strings.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for screen and event identifiers.
///
/// Keys are opaque to the engine - it only ever clones, compares, and
/// hashes them. The trait is blanket-implemented, so deriving the listed
/// traits on an enum (or using `String`) is all that is needed.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: keys are map indices and history entries
/// - `Debug`: keys must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: keys must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use screenflow::core::Key;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Welcome,
///     Dashboard,
/// }
///
/// fn assert_key<K: Key>() {}
/// assert_key::<Screen>();
/// assert_key::<String>();
/// ```
pub trait Key:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Key for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// A position in a flow: either a named screen or the terminal endpoint.
///
/// `Step::Done` is the single reserved terminal value. It is absorbing:
/// once a flow reaches it, no event can move the flow anywhere else.
/// Because the terminal is an enum variant rather than a reserved key
/// value, it can never collide with a caller-chosen screen key.
///
/// # Example
///
/// ```rust
/// use screenflow::core::Step;
///
/// let at_screen: Step<String> = Step::Screen("welcome".to_string());
/// let finished: Step<String> = Step::Done;
///
/// assert!(!at_screen.is_done());
/// assert!(finished.is_done());
/// assert_eq!(at_screen.screen().map(String::as_str), Some("welcome"));
/// assert_eq!(finished.screen(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Step<K: Key> {
    /// The flow is at the screen named by this key.
    Screen(K),
    /// The flow has ended. Absorbing.
    Done,
}

impl<K: Key> Step<K> {
    /// Check whether this step is the terminal endpoint.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Get the screen key, or `None` at the terminal endpoint.
    pub fn screen(&self) -> Option<&K> {
        match self {
            Self::Screen(key) => Some(key),
            Self::Done => None,
        }
    }
}

impl<K: Key> From<K> for Step<K> {
    fn from(key: K) -> Self {
        Self::Screen(key)
    }
}
