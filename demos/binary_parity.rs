//! Binary Parity Automaton
//!
//! The classic two-state DFA over {0, 1} accepting binary strings with
//! an odd number of 1s, validated against a handful of inputs with the
//! full visited path printed for each.
//!
//! Run with: cargo run --example binary_parity

use dfatrace::{automaton, Automaton};

fn main() {
    let dfa: Automaton<String, char> = automaton! {
        states: ["q0", "q1"],
        alphabet: ['0', '1'],
        start: "q0",
        accept: ["q1"],
        transitions: [
            ("q0", '0') => "q0",
            ("q0", '1') => "q1",
            ("q1", '0') => "q1",
            ("q1", '1') => "q0",
        ],
    }
    .unwrap();

    println!("=== Binary Parity Automaton ===\n");

    for input in ["", "1", "11", "101", "102", "0110"] {
        let result = dfa.validate_str(input);
        let verdict = if result.accepted { "ACCEPTED" } else { "REJECTED" };
        let path: Vec<&str> = result.path().into_iter().map(String::as_str).collect();

        println!("input {input:?}: {verdict} ({})", result.message);
        println!("  path: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
