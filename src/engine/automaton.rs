//! The automaton definition: a validated, immutable five-tuple.

use crate::core::{StateId, Symbol};
use crate::engine::error::DefinitionError;
use crate::engine::run::TrapPolicy;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

/// A deterministic finite automaton.
///
/// An `Automaton` aggregates the state set, alphabet, transition table,
/// start state, and accept states. Every definition is validated at
/// construction; once built, the automaton is immutable, so any number
/// of concurrent validations may share one instance by reference.
///
/// The transition table is keyed by the composite (state, symbol) pair.
/// It need not be total: a missing entry means the input is rejected at
/// that point with a missing-transition reason.
///
/// # Example
///
/// ```rust
/// use dfatrace::Automaton;
///
/// // Accepts strings of a's ending the walk in 'even'.
/// let dfa: Automaton<String, char> = Automaton::new(
///     ["even".to_string(), "odd".to_string()],
///     ['a'],
///     [
///         ("even".to_string(), 'a', "odd".to_string()),
///         ("odd".to_string(), 'a', "even".to_string()),
///     ],
///     "even".to_string(),
///     ["even".to_string()],
/// )
/// .unwrap();
///
/// assert!(dfa.validate_str("aa").accepted);
/// assert!(!dfa.validate_str("aaa").accepted);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: StateId, Y: Symbol> {
    states: HashSet<S>,
    alphabet: HashSet<Y>,
    transitions: HashMap<(S, Y), S>,
    start: S,
    accept: HashSet<S>,
    traps: HashSet<S>,
    trap_policy: TrapPolicy,
}

impl<S: StateId, Y: Symbol> Automaton<S, Y> {
    /// Build a validated automaton from its five-tuple.
    ///
    /// Transitions are supplied as `(from, symbol, to)` triples so that
    /// duplicate (from, symbol) keys are still observable: a key mapped
    /// to two different destinations is rejected as
    /// [`DefinitionError::NonDeterministicTransition`] instead of letting
    /// the last write win. Supplying the identical triple twice is
    /// harmless.
    ///
    /// # Errors
    ///
    /// Returns a [`DefinitionError`] when the start state or an accept
    /// state is not in the state set, or when a transition references an
    /// unknown state or symbol.
    pub fn new<SI, YI, TI, AI>(
        states: SI,
        alphabet: YI,
        transitions: TI,
        start_state: S,
        accept_states: AI,
    ) -> Result<Self, DefinitionError<S, Y>>
    where
        SI: IntoIterator<Item = S>,
        YI: IntoIterator<Item = Y>,
        TI: IntoIterator<Item = (S, Y, S)>,
        AI: IntoIterator<Item = S>,
    {
        let states: HashSet<S> = states.into_iter().collect();
        let alphabet: HashSet<Y> = alphabet.into_iter().collect();

        if !states.contains(&start_state) {
            return Err(DefinitionError::StartStateNotInStates(start_state));
        }

        let accept: HashSet<S> = accept_states.into_iter().collect();
        if let Some(unknown) = accept.iter().find(|state| !states.contains(*state)) {
            return Err(DefinitionError::AcceptStateNotInStates(unknown.clone()));
        }

        let mut table: HashMap<(S, Y), S> = HashMap::new();
        for (from, symbol, to) in transitions {
            if !states.contains(&from) {
                return Err(DefinitionError::TransitionFromUnknownState(from));
            }
            if !alphabet.contains(&symbol) {
                return Err(DefinitionError::TransitionOnUnknownSymbol(symbol));
            }
            if !states.contains(&to) {
                return Err(DefinitionError::TransitionToUnknownState(to));
            }

            match table.entry((from, symbol)) {
                Entry::Vacant(slot) => {
                    slot.insert(to);
                }
                Entry::Occupied(slot) => {
                    if *slot.get() != to {
                        let (state, symbol) = slot.key().clone();
                        return Err(DefinitionError::NonDeterministicTransition {
                            state,
                            symbol,
                            first: slot.get().clone(),
                            second: to,
                        });
                    }
                }
            }
        }

        let traps = compute_traps(&states, &table, &accept);

        Ok(Self {
            states,
            alphabet,
            transitions: table,
            start: start_state,
            accept,
            traps,
            trap_policy: TrapPolicy::default(),
        })
    }

    /// Set the trap-handling policy, consuming and returning the automaton.
    ///
    /// The default is [`TrapPolicy::RunToCompletion`].
    pub fn with_trap_policy(mut self, policy: TrapPolicy) -> Self {
        self.trap_policy = policy;
        self
    }

    /// The state set.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &HashSet<Y> {
        &self.alphabet
    }

    /// The transition table, keyed by (state, symbol).
    pub fn transitions(&self) -> &HashMap<(S, Y), S> {
        &self.transitions
    }

    /// The destination for a (state, symbol) pair, if one is defined.
    pub fn transition(&self, state: &S, symbol: &Y) -> Option<&S> {
        self.transitions.get(&(state.clone(), symbol.clone()))
    }

    /// The start state.
    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// The accept states.
    pub fn accept_states(&self) -> &HashSet<S> {
        &self.accept
    }

    /// States from which no accept state is reachable.
    ///
    /// Computed once at construction by walking the transition edges
    /// backwards from the accept states; anything the walk never reaches
    /// is a trap. Exposed so a renderer can mark trap states.
    pub fn trap_states(&self) -> &HashSet<S> {
        &self.traps
    }

    /// Whether no accept state is reachable from `state`.
    pub fn is_trap(&self, state: &S) -> bool {
        self.traps.contains(state)
    }

    /// The configured trap-handling policy.
    pub fn trap_policy(&self) -> TrapPolicy {
        self.trap_policy
    }

    /// Whether every (state, symbol) pair has a transition.
    pub fn is_total(&self) -> bool {
        self.transitions.len() == self.states.len() * self.alphabet.len()
    }

    /// The (state, symbol) pairs with no transition entry.
    ///
    /// Missing entries are legal and mean implicit rejection at
    /// execution time; this reports them for hosts that expect a total
    /// table.
    pub fn gaps(&self) -> Vec<(&S, &Y)> {
        let mut gaps = Vec::new();
        for state in &self.states {
            for symbol in &self.alphabet {
                if !self.transitions.contains_key(&(state.clone(), symbol.clone())) {
                    gaps.push((state, symbol));
                }
            }
        }
        gaps
    }
}

/// Reverse breadth-first search from the accept states.
///
/// A state is a trap exactly when the backwards walk never reaches it.
fn compute_traps<S: StateId, Y: Symbol>(
    states: &HashSet<S>,
    table: &HashMap<(S, Y), S>,
    accept: &HashSet<S>,
) -> HashSet<S> {
    let mut reverse: HashMap<&S, Vec<&S>> = HashMap::new();
    for (key, to) in table {
        reverse.entry(to).or_default().push(&key.0);
    }

    let mut reaching: HashSet<&S> = accept.iter().collect();
    let mut queue: VecDeque<&S> = accept.iter().collect();

    while let Some(state) = queue.pop_front() {
        if let Some(sources) = reverse.get(state) {
            for &source in sources {
                if reaching.insert(source) {
                    queue.push_back(source);
                }
            }
        }
    }

    states
        .iter()
        .filter(|state| !reaching.contains(state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(from: &str, symbol: char, to: &str) -> (String, char, String) {
        (from.to_string(), symbol, to.to_string())
    }

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn construction_rejects_unknown_start_state() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            Vec::new(),
            "q9".to_string(),
            names(&["q0"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::StartStateNotInStates("q9".to_string())
        );
    }

    #[test]
    fn construction_rejects_unknown_accept_state() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            Vec::new(),
            "q0".to_string(),
            names(&["q9"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::AcceptStateNotInStates("q9".to_string())
        );
    }

    #[test]
    fn construction_rejects_unknown_transition_source() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            vec![triple("q9", 'a', "q0")],
            "q0".to_string(),
            names(&["q0"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::TransitionFromUnknownState("q9".to_string())
        );
    }

    #[test]
    fn construction_rejects_unknown_transition_symbol() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            vec![triple("q0", 'z', "q0")],
            "q0".to_string(),
            names(&["q0"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::TransitionOnUnknownSymbol('z')
        );
    }

    #[test]
    fn construction_rejects_unknown_transition_target() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            vec![triple("q0", 'a', "q9")],
            "q0".to_string(),
            names(&["q0"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::TransitionToUnknownState("q9".to_string())
        );
    }

    #[test]
    fn conflicting_duplicate_keys_are_non_deterministic() {
        let result = Automaton::new(
            names(&["q0", "q1"]),
            vec!['a'],
            vec![triple("q0", 'a', "q0"), triple("q0", 'a', "q1")],
            "q0".to_string(),
            names(&["q0"]),
        );

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::NonDeterministicTransition {
                state: "q0".to_string(),
                symbol: 'a',
                first: "q0".to_string(),
                second: "q1".to_string(),
            }
        );
    }

    #[test]
    fn identical_duplicate_triples_are_idempotent() {
        let result = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            vec![triple("q0", 'a', "q0"), triple("q0", 'a', "q0")],
            "q0".to_string(),
            names(&["q0"]),
        );

        let dfa = result.unwrap();
        assert_eq!(dfa.transitions().len(), 1);
    }

    #[test]
    fn trap_states_cannot_reach_accept() {
        let dfa = Automaton::new(
            names(&["q0", "ok", "dead"]),
            vec!['a', 'b'],
            vec![
                triple("q0", 'a', "ok"),
                triple("q0", 'b', "dead"),
                triple("dead", 'a', "dead"),
                triple("dead", 'b', "dead"),
            ],
            "q0".to_string(),
            names(&["ok"]),
        )
        .unwrap();

        assert!(dfa.is_trap(&"dead".to_string()));
        assert!(!dfa.is_trap(&"q0".to_string()));
        assert!(!dfa.is_trap(&"ok".to_string()));
        assert_eq!(dfa.trap_states().len(), 1);
    }

    #[test]
    fn isolated_non_accepting_state_is_a_trap() {
        let dfa = Automaton::new(
            names(&["q0", "lost"]),
            vec!['a'],
            vec![triple("q0", 'a', "q0")],
            "q0".to_string(),
            names(&["q0"]),
        )
        .unwrap();

        assert!(dfa.is_trap(&"lost".to_string()));
    }

    #[test]
    fn gaps_report_missing_pairs() {
        let dfa = Automaton::new(
            names(&["q0", "q1"]),
            vec!['a', 'b'],
            vec![triple("q0", 'a', "q1")],
            "q0".to_string(),
            names(&["q1"]),
        )
        .unwrap();

        assert!(!dfa.is_total());
        assert_eq!(dfa.gaps().len(), 3);
    }

    #[test]
    fn total_table_has_no_gaps() {
        let dfa = Automaton::new(
            names(&["q0", "q1"]),
            vec!['a'],
            vec![triple("q0", 'a', "q1"), triple("q1", 'a', "q0")],
            "q0".to_string(),
            names(&["q1"]),
        )
        .unwrap();

        assert!(dfa.is_total());
        assert!(dfa.gaps().is_empty());
    }

    #[test]
    fn transition_lookup_matches_table() {
        let dfa = Automaton::new(
            names(&["q0", "q1"]),
            vec!['a'],
            vec![triple("q0", 'a', "q1")],
            "q0".to_string(),
            names(&["q1"]),
        )
        .unwrap();

        assert_eq!(
            dfa.transition(&"q0".to_string(), &'a'),
            Some(&"q1".to_string())
        );
        assert_eq!(dfa.transition(&"q1".to_string(), &'a'), None);
    }

    #[test]
    fn with_trap_policy_configures_short_circuit() {
        let dfa = Automaton::new(
            names(&["q0"]),
            vec!['a'],
            vec![triple("q0", 'a', "q0")],
            "q0".to_string(),
            names(&["q0"]),
        )
        .unwrap()
        .with_trap_policy(TrapPolicy::ShortCircuit);

        assert_eq!(dfa.trap_policy(), TrapPolicy::ShortCircuit);
    }
}
