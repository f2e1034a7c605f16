//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! defining automata with minimal boilerplate. Everything funnels into
//! [`crate::engine::Automaton::new`], so builder-made automata get the
//! same construction-time validation as directly-constructed ones.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
