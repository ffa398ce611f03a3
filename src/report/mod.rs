//! Run results
//!
//! One call to [`crate::interpreter::engine::Interpreter::run`] produces a
//! [`RunReport`]: the final variable snapshot, the ordered human-readable
//! trace, and a [`FragmentOutcome`] for every fragment in program order.
//! The report owns all of its data; it stays valid after the interpreter
//! starts another run.

use std::fmt;

use crate::interpreter::errors::RuntimeError;

/// How one fragment ended.
#[derive(Debug, Clone)]
pub enum FragmentOutcome {
    /// The fragment completed.  `result` carries the computed value for
    /// arithmetic fragments and is `None` for every other kind.
    Succeeded { result: Option<i32> },
    /// The fragment failed; the run continued with the next fragment.
    Failed { error: RuntimeError },
}

impl FragmentOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FragmentOutcome::Failed { .. })
    }
}

impl fmt::Display for FragmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentOutcome::Succeeded { result: Some(value) } => {
                write!(f, "succeeded with {}", value)
            }
            FragmentOutcome::Succeeded { result: None } => write!(f, "succeeded"),
            FragmentOutcome::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

/// Everything observable from one program run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final `(name, value)` pairs in declaration order.
    pub variables: Vec<(String, i32)>,
    /// Human-readable log: one header per fragment, indented entries per
    /// iteration and body statement.
    pub trace: Vec<String>,
    /// One outcome per fragment, in program order.
    pub outcomes: Vec<FragmentOutcome>,
}

impl RunReport {
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.is_failure())
    }
}
