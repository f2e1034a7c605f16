//! Visited-state traces.
//!
//! A [`Trace`] records the path an automaton takes through its states
//! while consuming input. It exists so a presentation layer can replay
//! the run step-by-step: each [`Step`] carries the source state, the
//! consumed symbol, and the destination state, which is enough to
//! highlight both the visited node and the traversed edge.

use super::state::{StateId, Symbol};
use serde::{Deserialize, Serialize};

/// Record of a single consumed symbol.
///
/// # Example
///
/// ```rust
/// use dfatrace::Step;
///
/// let step = Step {
///     from: "q0".to_string(),
///     symbol: '1',
///     to: "q1".to_string(),
/// };
/// assert_eq!(step.to, "q1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: StateId, Y: Symbol> {
    /// The state the symbol was consumed in
    pub from: S,
    /// The consumed input symbol
    pub symbol: Y,
    /// The state the automaton moved to
    pub to: S,
}

/// Ordered record of the states visited during one run.
///
/// A trace always contains at least the start state; recording a step
/// returns a new trace rather than mutating the existing one.
///
/// # Example
///
/// ```rust
/// use dfatrace::{Step, Trace};
///
/// let trace: Trace<String, char> = Trace::new("q0".to_string());
///
/// let trace = trace.record(Step {
///     from: "q0".to_string(),
///     symbol: '1',
///     to: "q1".to_string(),
/// });
///
/// assert_eq!(trace.path(), ["q0", "q1"]);
/// assert_eq!(trace.current(), "q1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: StateId, Y: Symbol> {
    start: S,
    steps: Vec<Step<S, Y>>,
}

impl<S: StateId, Y: Symbol> Trace<S, Y> {
    /// Create a trace positioned at the start state.
    pub fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the step appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfatrace::{Step, Trace};
    ///
    /// let trace: Trace<String, char> = Trace::new("q0".to_string());
    /// let extended = trace.record(Step {
    ///     from: "q0".to_string(),
    ///     symbol: '0',
    ///     to: "q0".to_string(),
    /// });
    ///
    /// assert_eq!(trace.steps().len(), 0); // Original unchanged
    /// assert_eq!(extended.steps().len(), 1);
    /// ```
    pub fn record(&self, step: Step<S, Y>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            start: self.start.clone(),
            steps,
        }
    }

    /// The state the trace began in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// The state the trace currently ends in.
    pub fn current(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// All recorded steps in order.
    pub fn steps(&self) -> &[Step<S, Y>] {
        &self.steps
    }

    /// The full path of visited states.
    ///
    /// Returns references in visit order: the start state, then the
    /// destination of each step. The length is always one more than the
    /// number of consumed symbols.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(&self.start);
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }
}
