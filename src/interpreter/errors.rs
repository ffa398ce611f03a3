//! Runtime error types for the block interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that
//! can occur while executing a program (as opposed to errors in the editor
//! front-end, which validates fragments before they reach the interpreter).
//!
//! Runtime errors are fatal only to the fragment (or nested body statement)
//! that raised them; the run itself continues with the next top-level
//! fragment.

use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone)]
pub enum RuntimeError {
    /// Attempted to declare a variable with an empty or whitespace name
    InvalidName,

    /// Attempted to declare a variable that already exists
    DuplicateDeclaration { name: String },

    /// Read or write of a variable that was never declared
    UndeclaredVariable { name: String },

    /// Expression evaluation failed (unmatched parentheses, empty input,
    /// insufficient operands, unknown operator, division by zero, ...)
    EvaluationError { message: String },

    /// Assignment text contains no `=`
    MalformedAssignment { code: String },

    /// For-loop header does not split into init; condition; increment
    MalformedForLoop,

    /// A loop body executed more than the allowed number of times
    IterationLimitExceeded { limit: usize },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::InvalidName => {
                write!(f, "Variable name cannot be empty")
            }
            RuntimeError::DuplicateDeclaration { name } => {
                write!(f, "Variable '{}' is already declared", name)
            }
            RuntimeError::UndeclaredVariable { name } => {
                write!(f, "Use of undeclared variable '{}'", name)
            }
            RuntimeError::EvaluationError { message } => {
                write!(f, "{}", message)
            }
            RuntimeError::MalformedAssignment { code } => {
                write!(
                    f,
                    "Malformed assignment '{}': expected 'name = expression'",
                    code
                )
            }
            RuntimeError::MalformedForLoop => {
                write!(
                    f,
                    "Malformed for loop: expected 'for (init; condition; increment)'"
                )
            }
            RuntimeError::IterationLimitExceeded { limit } => {
                write!(
                    f,
                    "Exceeded the maximum of {} iterations; the loop may never terminate",
                    limit
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
