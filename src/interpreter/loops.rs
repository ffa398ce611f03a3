//! Loop statement execution (`while`, `for`)
//!
//! Both loop forms re-extract their condition and body text on every
//! fragment execution and re-parse the body each iteration.  An iteration
//! counter guards against non-terminating loops: the counter is checked
//! before each body execution, so a loop fails with
//! [`RuntimeError::IterationLimitExceeded`] when it attempts its 1001st
//! iteration, leaving the store exactly as the 1000 completed iterations
//! produced it.
//!
//! A failure inside the body (or in the `for` increment) propagates out of
//! the loop and fails the whole fragment.

use crate::interpreter::constants::MAX_LOOP_ITERATIONS;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::statements::{block_body, missing_condition, parenthesized};

impl Interpreter {
    /// Executes a `while (condition) { body }` fragment.
    pub(crate) fn execute_while(&mut self, code: &str) -> Result<(), RuntimeError> {
        let condition = parenthesized(code)
            .ok_or_else(missing_condition)?
            .trim();
        let body = block_body(code);

        let mut iteration: usize = 0;
        while self.evaluate_condition(condition)? {
            iteration += 1;
            if iteration > MAX_LOOP_ITERATIONS {
                return Err(RuntimeError::IterationLimitExceeded {
                    limit: MAX_LOOP_ITERATIONS,
                });
            }

            self.trace.push(format!(
                "  Iteration {}: condition {} is true",
                iteration, condition
            ));
            self.execute_body(body)?;
        }

        self.trace.push(format!(
            "  While loop finished after {} iterations",
            iteration
        ));
        Ok(())
    }

    /// Executes a `for (init; condition; increment) { body }` fragment.
    ///
    /// The header must split on `;` into exactly three parts.  An empty
    /// init or increment is skipped; an empty condition loops
    /// unconditionally (until the iteration cap trips).  Init and increment
    /// execute as assignments.
    pub(crate) fn execute_for(&mut self, code: &str) -> Result<(), RuntimeError> {
        let header = parenthesized(code).ok_or(RuntimeError::MalformedForLoop)?;
        let parts: Vec<&str> = header.split(';').collect();
        if parts.len() != 3 {
            return Err(RuntimeError::MalformedForLoop);
        }

        let init = parts[0].trim();
        let condition = parts[1].trim();
        let increment = parts[2].trim();
        let body = block_body(code);

        if !init.is_empty() {
            self.trace.push(format!("  Initialization: {}", init));
            self.execute_assignment(init)?;
        }

        let mut iteration: usize = 0;
        while condition.is_empty() || self.evaluate_condition(condition)? {
            iteration += 1;
            if iteration > MAX_LOOP_ITERATIONS {
                return Err(RuntimeError::IterationLimitExceeded {
                    limit: MAX_LOOP_ITERATIONS,
                });
            }

            if condition.is_empty() {
                self.trace
                    .push(format!("  Iteration {} (no condition)", iteration));
            } else {
                self.trace.push(format!(
                    "  Iteration {}: condition {} is true",
                    iteration, condition
                ));
            }

            self.execute_body(body)?;

            if !increment.is_empty() {
                self.execute_assignment(increment)?;
            }
        }

        self.trace.push(format!(
            "  For loop finished after {} iterations",
            iteration
        ));
        Ok(())
    }
}
