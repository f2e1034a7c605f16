//! Trait seams for state identifiers and input symbols.
//!
//! A DFA in this crate is runtime data, not a compile-time enum: its
//! states and symbols are supplied by the host when the automaton is
//! constructed. These marker traits collect the bounds every state or
//! symbol value must satisfy, and are blanket-implemented so any
//! suitable type (notably `String` states and `char` symbols) works
//! without a manual impl.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Marker trait for state identifiers.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states are set members and composite map keys
/// - `Debug` + `Display`: states appear in diagnostics and result messages
/// - `Serialize` + `Deserialize`: traces and results are serializable
/// - `Send` + `Sync`: one automaton may serve validations on many threads
///
/// # Example
///
/// ```rust
/// use dfatrace::StateId;
///
/// fn takes_state<S: StateId>(state: &S) -> String {
///     format!("state {state}")
/// }
///
/// assert_eq!(takes_state(&"q0".to_string()), "state q0");
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> StateId for T where
    T: Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Marker trait for input symbols.
///
/// Same bounds as [`StateId`]; `char` is the canonical instance. The
/// alphabet is a finite set of these values, so symbols must hash and
/// compare; they appear in rejection messages, so they must display.
pub trait Symbol:
    Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Hash + Debug + Display + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
