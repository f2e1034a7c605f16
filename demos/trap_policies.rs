//! Trap-State Policies
//!
//! One automaton run under both trap policies. The machine jumps to a
//! dead state on 'b'; run-to-completion consumes the whole input before
//! rejecting, short-circuit stops the moment the dead state is entered.
//!
//! Run with: cargo run --example trap_policies

use dfatrace::{automaton, Automaton, TrapPolicy};

fn build(policy: TrapPolicy) -> Automaton<String, char> {
    automaton! {
        states: ["start", "ok", "dead"],
        alphabet: ['a', 'b'],
        start: "start",
        accept: ["ok"],
        transitions: [
            ("start", 'a') => "ok",
            ("start", 'b') => "dead",
            ("ok", 'a') => "ok",
            ("ok", 'b') => "dead",
            ("dead", 'a') => "dead",
            ("dead", 'b') => "dead",
        ],
        policy: policy,
    }
    .unwrap()
}

fn main() {
    println!("=== Trap-State Policies ===\n");

    for policy in [TrapPolicy::RunToCompletion, TrapPolicy::ShortCircuit] {
        let dfa = build(policy);
        let result = dfa.validate_str("baaa");
        let path: Vec<&str> = result.path().into_iter().map(String::as_str).collect();

        println!("{policy:?}:");
        println!("  trap states: {:?}", dfa.trap_states());
        println!("  verdict: {}", result.message);
        println!("  path: {}\n", path.join(" -> "));
    }
}
