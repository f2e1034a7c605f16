//! Execution of an automaton against an input symbol sequence.

use crate::core::{StateId, Step, Symbol, Trace};
use crate::engine::automaton::Automaton;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the engine treats entry into a trap state.
///
/// Observed DFA simulators disagree on this: some stop the moment a trap
/// state is entered, others keep consuming input and reject at the end
/// because the state is non-accepting. Both behaviors are available;
/// the choice is a construction-time flag, never picked silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapPolicy {
    /// Keep consuming input; a trap state rejects at end of input like
    /// any other non-accepting state.
    #[default]
    RunToCompletion,

    /// Reject as soon as a trap state is entered, leaving the rest of
    /// the input unconsumed.
    ShortCircuit,
}

/// Why an input was rejected.
///
/// Every rejection carries one of these reason codes so callers can
/// tell the failure classes apart without parsing the message. An
/// out-of-alphabet symbol is a different class from a missing table
/// entry, and both differ from simply ending in a non-accepting state.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum RejectReason<S: StateId, Y: Symbol> {
    /// The input contained a symbol outside the alphabet.
    #[error("symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: Y },

    /// No table entry for the current (state, symbol) pair.
    #[error("no transition from state '{state}' on symbol '{symbol}'")]
    NoTransition { state: S, symbol: Y },

    /// A trap state was entered under [`TrapPolicy::ShortCircuit`].
    #[error("entered trap state '{state}'")]
    TrapEntered { state: S },

    /// The input was fully consumed in a non-accepting state.
    #[error("ended in non-accepting state '{state}'")]
    NonAccepting { state: S },
}

/// The outcome of validating one input against an automaton.
///
/// Created fresh per input; shares nothing with other executions. The
/// trace holds the full visited path (`path()[0]` is always the start
/// state) so a presentation layer can replay the run step by step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ExecutionResult<S: StateId, Y: Symbol> {
    /// Whether the input was accepted
    pub accepted: bool,
    /// The visited-state record, exposed for step-by-step rendering
    pub trace: Trace<S, Y>,
    /// Why the input was rejected; `None` exactly when accepted
    pub reason: Option<RejectReason<S, Y>>,
    /// Human-readable explanation of the outcome
    pub message: String,
}

impl<S: StateId, Y: Symbol> ExecutionResult<S, Y> {
    fn accept(trace: Trace<S, Y>) -> Self {
        Self {
            accepted: true,
            trace,
            reason: None,
            message: "string accepted".to_string(),
        }
    }

    fn reject(trace: Trace<S, Y>, reason: RejectReason<S, Y>) -> Self {
        let message = reason.to_string();
        Self {
            accepted: false,
            trace,
            reason: Some(reason),
            message,
        }
    }

    /// The full path of visited states, start state first.
    pub fn path(&self) -> Vec<&S> {
        self.trace.path()
    }
}

impl<S: StateId, Y: Symbol> Automaton<S, Y> {
    /// Run the automaton over an input symbol sequence.
    ///
    /// A single left-to-right scan with no backtracking. Each symbol is
    /// checked against the alphabet *before* the transition table is
    /// consulted, so an out-of-alphabet symbol is reported as
    /// [`RejectReason::InvalidSymbol`] even when the table also has no
    /// entry for it. Empty input is legal: the result path is just the
    /// start state, accepted iff the start state accepts.
    ///
    /// All failure modes are returned as data in the
    /// [`ExecutionResult`]; this function never panics on any input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfatrace::Automaton;
    ///
    /// let dfa: Automaton<String, char> = Automaton::new(
    ///     ["q0".to_string(), "q1".to_string()],
    ///     ['0', '1'],
    ///     [
    ///         ("q0".to_string(), '1', "q1".to_string()),
    ///         ("q1".to_string(), '1', "q0".to_string()),
    ///     ],
    ///     "q0".to_string(),
    ///     ["q1".to_string()],
    /// )
    /// .unwrap();
    ///
    /// let result = dfa.validate("1".chars());
    /// assert!(result.accepted);
    /// assert_eq!(result.path(), ["q0", "q1"]);
    /// ```
    pub fn validate<I>(&self, input: I) -> ExecutionResult<S, Y>
    where
        I: IntoIterator<Item = Y>,
    {
        let mut trace = Trace::new(self.start_state().clone());

        for symbol in input {
            // Alphabet membership is a different failure class from a
            // missing table entry; check it first.
            if !self.alphabet().contains(&symbol) {
                return ExecutionResult::reject(trace, RejectReason::InvalidSymbol { symbol });
            }

            let key = (trace.current().clone(), symbol);
            let Some(next) = self.transitions().get(&key) else {
                let (state, symbol) = key;
                return ExecutionResult::reject(
                    trace,
                    RejectReason::NoTransition { state, symbol },
                );
            };

            let (from, symbol) = key;
            trace = trace.record(Step {
                from,
                symbol,
                to: next.clone(),
            });

            if self.trap_policy() == TrapPolicy::ShortCircuit && self.is_trap(next) {
                return ExecutionResult::reject(
                    trace,
                    RejectReason::TrapEntered {
                        state: next.clone(),
                    },
                );
            }
        }

        let current = trace.current().clone();
        if self.accept_states().contains(&current) {
            ExecutionResult::accept(trace)
        } else {
            ExecutionResult::reject(trace, RejectReason::NonAccepting { state: current })
        }
    }
}

impl<S: StateId> Automaton<S, char> {
    /// Run the automaton over the characters of a string.
    pub fn validate_str(&self, input: &str) -> ExecutionResult<S, char> {
        self.validate(input.chars())
    }
}
