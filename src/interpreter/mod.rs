//! Block program execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Interpreter`] driving one run, fragment by fragment
//! - `expressions`: Infix→postfix conversion and postfix evaluation
//! - `conditions`: Comparison-operator splitting for `if`/`while`/`for`
//! - `statements`: Declarations, assignments, and nested body execution
//! - `loops`: `while` and `for` drivers with the iteration cap
//! - [`errors`]: Runtime error types
//!
//! # Execution model
//!
//! Execution is strictly sequential and synchronous.  Each fragment's code
//! string is parsed afresh when it executes; a fragment that fails is
//! recorded against its outcome and the run continues with the next
//! fragment.  Inside a nested `if`/`while`/`for` body the first failing
//! statement aborts the rest of that fragment only.

pub mod constants;
pub mod engine;
pub mod errors;

mod conditions;
mod expressions;
mod loops;
mod statements;
