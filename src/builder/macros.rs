//! Macros for declaring automata.

/// Declare an automaton from its five-tuple in one expression.
///
/// Expands to [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// calls and yields the builder's `Result`, so a malformed definition is
/// still rejected at construction time. An optional trailing `policy:`
/// entry sets the trap-handling policy.
///
/// # Example
///
/// ```
/// use dfatrace::{automaton, Automaton};
///
/// let dfa: Automaton<String, char> = automaton! {
///     states: ["q0", "q1"],
///     alphabet: ['0', '1'],
///     start: "q0",
///     accept: ["q1"],
///     transitions: [
///         ("q0", '0') => "q0",
///         ("q0", '1') => "q1",
///         ("q1", '0') => "q1",
///         ("q1", '1') => "q0",
///     ],
/// }
/// .unwrap();
///
/// assert!(dfa.validate_str("1").accepted);
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [$($state:expr),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:expr,
        accept: [$($accept:expr),* $(,)?],
        transitions: [
            $(($from:expr, $on:expr) => $to:expr),* $(,)?
        ] $(,)?

        $(policy: $policy:expr $(,)?)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state($state))*
            $(.symbol($symbol))*
            $(.transition($from, $on, $to))*
            .start($start)
            $(.accept($accept))*
            $(.trap_policy($policy))?
            .build()
    };
}
