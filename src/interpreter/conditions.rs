//! Condition evaluation for `if`, `while`, and `for`
//!
//! A condition is split at most once on a comparison operator.  Operators
//! are searched in the order `>=, <=, !=, ==, >, <` so that a
//! multi-character operator is never mistaken for its single-character
//! half.  A condition without any comparison operator is evaluated as an
//! expression and treated as true when nonzero; an empty condition is
//! unconditionally true (omitted `for`/`while` conditions).

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;

/// Comparison operators in match-priority order.  The two-character
/// operators must come first.
const COMPARISON_OPERATORS: [&str; 6] = [">=", "<=", "!=", "==", ">", "<"];

impl Interpreter {
    /// Evaluates a condition string to a boolean.
    ///
    /// The first operator found in priority order wins, even if another
    /// operator occurs earlier in the text.
    pub(crate) fn evaluate_condition(&self, condition: &str) -> Result<bool, RuntimeError> {
        let condition = condition.trim();
        if condition.is_empty() {
            return Ok(true);
        }

        for op in COMPARISON_OPERATORS {
            if let Some(index) = condition.find(op) {
                let left = self.evaluate(&condition[..index])?;
                let right = self.evaluate(&condition[index + op.len()..])?;

                return Ok(match op {
                    ">=" => left >= right,
                    "<=" => left <= right,
                    "!=" => left != right,
                    "==" => left == right,
                    ">" => left > right,
                    "<" => left < right,
                    _ => unreachable!(),
                });
            }
        }

        Ok(self.evaluate(condition)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter_with(vars: &[(&str, i32)]) -> Interpreter {
        let mut interp = Interpreter::new();
        for (name, value) in vars {
            interp.store.declare(name).unwrap();
            interp.store.set(name, *value).unwrap();
        }
        interp
    }

    #[test]
    fn empty_condition_is_true() {
        let interp = Interpreter::new();
        assert!(interp.evaluate_condition("").unwrap());
        assert!(interp.evaluate_condition("   ").unwrap());
    }

    #[test]
    fn comparisons_against_variables() {
        let interp = interpreter_with(&[("x", 10)]);
        assert!(interp.evaluate_condition("x > 5").unwrap());
        assert!(!interp.evaluate_condition("x < 5").unwrap());
        assert!(interp.evaluate_condition("x >= 10").unwrap());
        assert!(interp.evaluate_condition("x <= 10").unwrap());
        assert!(interp.evaluate_condition("x == 10").unwrap());
        assert!(interp.evaluate_condition("x != 3").unwrap());

        let interp = interpreter_with(&[("x", 3)]);
        assert!(!interp.evaluate_condition("x > 5").unwrap());
    }

    #[test]
    fn multi_character_operators_win_over_their_halves() {
        // "<=" must not be split at "<".
        let interp = interpreter_with(&[("x", 5)]);
        assert!(interp.evaluate_condition("x <= 5").unwrap());
        assert!(interp.evaluate_condition("x >= 5").unwrap());
    }

    #[test]
    fn bare_expression_is_nonzero_truth() {
        let interp = Interpreter::new();
        assert!(interp.evaluate_condition("1").unwrap());
        assert!(interp.evaluate_condition("2 + 3").unwrap());
        assert!(!interp.evaluate_condition("2 - 2").unwrap());
    }

    #[test]
    fn side_errors_propagate() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate_condition("y > 1").unwrap_err(),
            RuntimeError::UndeclaredVariable { .. }
        ));
        assert!(matches!(
            interp.evaluate_condition("1 / 0 == 1").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }
}
