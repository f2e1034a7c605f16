//! The automaton definition and its execution loop.
//!
//! This module owns the [`Automaton`] aggregate and everything that runs
//! it:
//!
//! - **Construction**: [`Automaton::new`] validates the five-tuple and
//!   refuses to return a malformed or non-deterministic definition
//! - **Trap analysis**: states from which no accept state is reachable
//!   are identified once at construction
//! - **Execution**: [`Automaton::validate`] consumes input symbol by
//!   symbol and produces an [`ExecutionResult`] with the full visited
//!   path and an explicit reject reason
//!
//! Execution-time failures (a symbol outside the alphabet, a missing
//! table entry) are ordinary rejections reported in the result, never
//! panics or errors.

pub mod automaton;
pub mod error;
pub mod run;

pub use automaton::Automaton;
pub use error::DefinitionError;
pub use run::{ExecutionResult, RejectReason, TrapPolicy};
