//! Builder for constructing automata with a fluent API.

use crate::builder::error::BuildError;
use crate::core::{StateId, Symbol};
use crate::engine::{Automaton, DefinitionError, TrapPolicy};
use std::collections::HashSet;

/// Builder for constructing automata with a fluent API.
///
/// States, symbols, and transitions may be added in any order; `build`
/// validates the assembled definition through
/// [`Automaton::new`](crate::engine::Automaton::new).
///
/// # Example
///
/// ```rust
/// use dfatrace::{Automaton, AutomatonBuilder};
///
/// let dfa: Automaton<String, char> = AutomatonBuilder::new()
///     .states(["even", "odd"])
///     .symbols(['a'])
///     .transition("even", 'a', "odd")
///     .transition("odd", 'a', "even")
///     .start("even")
///     .accept("even")
///     .build()
///     .unwrap();
///
/// assert!(dfa.validate_str("aa").accepted);
/// ```
pub struct AutomatonBuilder<S: StateId, Y: Symbol> {
    states: HashSet<S>,
    alphabet: HashSet<Y>,
    transitions: Vec<(S, Y, S)>,
    start: Option<S>,
    accept: HashSet<S>,
    trap_policy: TrapPolicy,
    require_total: bool,
}

impl<S: StateId, Y: Symbol> AutomatonBuilder<S, Y> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
            alphabet: HashSet::new(),
            transitions: Vec::new(),
            start: None,
            accept: HashSet::new(),
            trap_policy: TrapPolicy::default(),
            require_total: false,
        }
    }

    /// Add a state.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Add multiple states at once.
    pub fn states<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add an alphabet symbol.
    pub fn symbol(mut self, symbol: impl Into<Y>) -> Self {
        self.alphabet.insert(symbol.into());
        self
    }

    /// Add multiple alphabet symbols at once.
    pub fn symbols<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Y>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add a transition from `from` to `to` on `on`.
    pub fn transition(mut self, from: impl Into<S>, on: impl Into<Y>, to: impl Into<S>) -> Self {
        self.transitions.push((from.into(), on.into(), to.into()));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<S>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Add an accept state.
    pub fn accept(mut self, state: impl Into<S>) -> Self {
        self.accept.insert(state.into());
        self
    }

    /// Add multiple accept states at once.
    pub fn accept_states<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.accept.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the trap-handling policy (optional).
    pub fn trap_policy(mut self, policy: TrapPolicy) -> Self {
        self.trap_policy = policy;
        self
    }

    /// Require the transition table to be total over states × alphabet.
    ///
    /// With this set, `build` fails when any (state, symbol) pair lacks
    /// an entry instead of leaving the gap as an implicit reject.
    pub fn require_total(mut self) -> Self {
        self.require_total = true;
        self
    }

    /// Build the automaton.
    ///
    /// Returns an error if required fields are missing or the assembled
    /// definition fails validation.
    pub fn build(self) -> Result<Automaton<S, Y>, BuildError<S, Y>> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let automaton = Automaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accept,
        )?
        .with_trap_policy(self.trap_policy);

        if self.require_total && !automaton.is_total() {
            return Err(DefinitionError::IncompleteTable {
                missing: automaton.gaps().len(),
            }
            .into());
        }

        Ok(automaton)
    }
}

impl<S: StateId, Y: Symbol> Default for AutomatonBuilder<S, Y> {
    fn default() -> Self {
        Self::new()
    }
}
