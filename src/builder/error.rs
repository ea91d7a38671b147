//! Build errors for flow construction.

use thiserror::Error;

/// Errors that can occur when building a flow.
///
/// Every variant is a configuration mistake caught before the first
/// dispatch; a built flow never fails at dispatch time.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial screen not specified. Call .initial_screen(key) before .build()")]
    MissingInitialScreen,

    #[error("Initial context not specified. Call .initial_context(value) before .build()")]
    MissingInitialContext,

    #[error("No screens defined. Add at least one screen")]
    NoScreens,

    #[error("Initial history must contain at least one screen")]
    EmptyInitialHistory,

    #[error("Initial screen {key} is not defined in the flow")]
    UnknownInitialScreen { key: String },

    #[error("Screen {key} is defined more than once")]
    DuplicateScreen { key: String },

    #[error("Route {from} -> {to} targets a screen that is not defined")]
    DanglingRoute { from: String, to: String },
}
