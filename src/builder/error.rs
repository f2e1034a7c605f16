//! Build errors for the automaton builder.

use crate::core::{StateId, Symbol};
use crate::engine::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError<S: StateId, Y: Symbol> {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Definition(#[from] DefinitionError<S, Y>),
}
