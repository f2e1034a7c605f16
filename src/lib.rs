//! Dfatrace: a deterministic finite automaton execution engine
//!
//! Dfatrace executes an already-fully-specified DFA against an input
//! symbol sequence and reports acceptance together with the full ordered
//! sequence of visited states. The engine is a pure core: `validate` is a
//! side-effect-free function of the automaton and the input, so one
//! immutable [`Automaton`](engine::Automaton) can serve arbitrarily many
//! concurrent validations without coordination.
//!
//! # Core Concepts
//!
//! - **Automaton**: immutable five-tuple (states, alphabet, transition
//!   table, start state, accept states), validated at construction
//! - **Trace**: the path of states visited while consuming the input,
//!   recorded step-by-step for rendering and animation
//! - **Reject reasons**: every rejection carries an explicit reason code
//!   plus a human-readable message, surfaced as data rather than faults
//!
//! # Example
//!
//! ```rust
//! use dfatrace::{Automaton, AutomatonBuilder};
//!
//! // Binary strings with an odd number of 1s.
//! let dfa: Automaton<String, char> = AutomatonBuilder::new()
//!     .states(["q0", "q1"])
//!     .symbols(['0', '1'])
//!     .transition("q0", '0', "q0")
//!     .transition("q0", '1', "q1")
//!     .transition("q1", '0', "q1")
//!     .transition("q1", '1', "q0")
//!     .start("q0")
//!     .accept("q1")
//!     .build()
//!     .unwrap();
//!
//! let result = dfa.validate_str("101");
//! assert!(!result.accepted);
//! assert_eq!(result.path(), ["q0", "q1", "q1", "q0"]);
//!
//! let result = dfa.validate_str("1");
//! assert!(result.accepted);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use core::{StateId, Step, Symbol, Trace};
pub use engine::{Automaton, DefinitionError, ExecutionResult, RejectReason, TrapPolicy};
