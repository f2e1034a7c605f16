//! Construction-time validation errors.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// Errors that make an automaton definition unusable.
///
/// All variants are construction-time failures: no partially-usable
/// automaton is ever returned. A definition that references a state or
/// symbol outside its declared sets is invalid; a (state, symbol) key
/// mapped to two different destinations is non-deterministic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError<S: StateId, Y: Symbol> {
    #[error("start state '{0}' is not in the state set")]
    StartStateNotInStates(S),

    #[error("accept state '{0}' is not in the state set")]
    AcceptStateNotInStates(S),

    #[error("transition source state '{0}' is not in the state set")]
    TransitionFromUnknownState(S),

    #[error("transition symbol '{0}' is not in the alphabet")]
    TransitionOnUnknownSymbol(Y),

    #[error("transition target state '{0}' is not in the state set")]
    TransitionToUnknownState(S),

    #[error("conflicting transitions from state '{state}' on symbol '{symbol}': both '{first}' and '{second}'")]
    NonDeterministicTransition {
        state: S,
        symbol: Y,
        first: S,
        second: S,
    },

    #[error("transition table was declared total but has {missing} missing entries")]
    IncompleteTable { missing: usize },
}
