//! Expression evaluation implementation
//!
//! This module evaluates arithmetic infix expressions in two passes:
//!
//! 1. [`infix_to_postfix`] — a shunting-yard scan producing a
//!    space-separated postfix string.  Operand tokens are maximal runs of
//!    alphanumerics/underscores; `-` in unary-expecting context becomes the
//!    distinguished unary-minus operator `~` (precedence 4, above `* / %`
//!    at 3 and `+ -` at 2).
//! 2. [`Interpreter::evaluate_postfix`] — a stack machine over the postfix
//!    tokens.  Identifiers are resolved through the variable store at this
//!    point, so store errors surface here.
//!
//! All arithmetic wraps on i32 overflow; division and modulo by zero are
//! reported as [`RuntimeError::EvaluationError`].

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;

/// Postfix symbol for unary negation, distinct from binary `-`.
const UNARY_MINUS: char = '~';

impl Interpreter {
    /// Evaluates an infix expression and returns its value.
    ///
    /// Fails with [`RuntimeError::EvaluationError`] on blank input,
    /// unmatched parentheses, insufficient operands, an unknown operator,
    /// or division/modulo by zero, and propagates
    /// [`RuntimeError::UndeclaredVariable`] from identifier lookups.
    pub fn evaluate(&self, expression: &str) -> Result<i32, RuntimeError> {
        if expression.trim().is_empty() {
            return Err(RuntimeError::EvaluationError {
                message: "Empty expression".to_string(),
            });
        }

        let postfix = infix_to_postfix(expression)?;
        self.evaluate_postfix(&postfix)
    }

    /// Evaluates a space-separated postfix token string with an integer
    /// stack.  Exactly one value must remain when the tokens are exhausted.
    fn evaluate_postfix(&self, postfix: &str) -> Result<i32, RuntimeError> {
        let mut stack: Vec<i32> = Vec::new();

        for token in postfix.split_whitespace() {
            // split_whitespace never yields an empty token
            let first = token.chars().next().unwrap();

            if first.is_ascii_digit() || (first == '-' && starts_negative_literal(token)) {
                let value =
                    token
                        .parse::<i32>()
                        .map_err(|_| RuntimeError::EvaluationError {
                            message: format!("Invalid integer literal '{}'", token),
                        })?;
                stack.push(value);
            } else if first.is_alphabetic() {
                stack.push(self.store.get(token)?);
            } else if first == UNARY_MINUS {
                let value = stack.pop().ok_or_else(|| RuntimeError::EvaluationError {
                    message: "Insufficient operands for unary minus".to_string(),
                })?;
                stack.push(value.wrapping_neg());
            } else {
                let b = stack.pop().ok_or_else(|| RuntimeError::EvaluationError {
                    message: format!("Insufficient operands for operator '{}'", first),
                })?;
                let a = stack.pop().ok_or_else(|| RuntimeError::EvaluationError {
                    message: format!("Insufficient operands for operator '{}'", first),
                })?;
                stack.push(apply_binary(first, a, b)?);
            }
        }

        if stack.len() != 1 {
            return Err(RuntimeError::EvaluationError {
                message: "Invalid expression".to_string(),
            });
        }
        Ok(stack[0])
    }
}

/// `-` directly followed by a digit is a negative integer literal rather
/// than an operator token.
fn starts_negative_literal(token: &str) -> bool {
    token
        .chars()
        .nth(1)
        .is_some_and(|c| c.is_ascii_digit())
}

fn apply_binary(op: char, a: i32, b: i32) -> Result<i32, RuntimeError> {
    match op {
        '+' => Ok(a.wrapping_add(b)),
        '-' => Ok(a.wrapping_sub(b)),
        '*' => Ok(a.wrapping_mul(b)),
        '/' => {
            if b == 0 {
                return Err(RuntimeError::EvaluationError {
                    message: "Division by zero".to_string(),
                });
            }
            Ok(a.wrapping_div(b))
        }
        '%' => {
            if b == 0 {
                return Err(RuntimeError::EvaluationError {
                    message: "Modulo by zero".to_string(),
                });
            }
            Ok(a.wrapping_rem(b))
        }
        other => Err(RuntimeError::EvaluationError {
            message: format!("Unknown operator '{}'", other),
        }),
    }
}

/// Converts an infix expression to a space-separated postfix token string.
///
/// Operand tokens end unary-expecting context; `(` and every operator
/// reopen it.  Stack operators are popped while their precedence is greater
/// than or equal to the incoming operator's (left associativity).
fn infix_to_postfix(expression: &str) -> Result<String, RuntimeError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut output = String::new();
    let mut stack: Vec<char> = Vec::new();
    let mut unary = true;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_alphanumeric() {
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                output.push(chars[i]);
                i += 1;
            }
            output.push(' ');
            unary = false;
            continue;
        }

        if c == '(' {
            stack.push(c);
            unary = true;
        } else if c == ')' {
            while let Some(&top) = stack.last() {
                if top == '(' {
                    break;
                }
                output.push(top);
                output.push(' ');
                stack.pop();
            }
            if stack.pop().is_none() {
                return Err(RuntimeError::EvaluationError {
                    message: "Unmatched closing parenthesis".to_string(),
                });
            }
            unary = false;
        } else {
            if unary && c == '-' {
                stack.push(UNARY_MINUS);
            } else {
                while let Some(&top) = stack.last() {
                    if precedence(c) > precedence(top) {
                        break;
                    }
                    output.push(top);
                    output.push(' ');
                    stack.pop();
                }
                stack.push(c);
            }
            unary = true;
        }

        i += 1;
    }

    while let Some(op) = stack.pop() {
        if op == '(' {
            return Err(RuntimeError::EvaluationError {
                message: "Unmatched opening parenthesis".to_string(),
            });
        }
        output.push(op);
        output.push(' ');
    }

    Ok(output.trim_end().to_string())
}

fn precedence(op: char) -> u8 {
    match op {
        UNARY_MINUS => 4,
        '*' | '/' | '%' => 3,
        '+' | '-' => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postfix_respects_precedence() {
        assert_eq!(infix_to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * +");
        assert_eq!(infix_to_postfix("(3 + 4) * 2").unwrap(), "3 4 + 2 *");
        assert_eq!(infix_to_postfix("10 - 4 - 3").unwrap(), "10 4 - 3 -");
    }

    #[test]
    fn unary_minus_becomes_distinguished_symbol() {
        assert_eq!(infix_to_postfix("-5 + 3").unwrap(), "5 ~ 3 +");
        assert_eq!(infix_to_postfix("2 * -3").unwrap(), "2 3 ~ *");
        assert_eq!(infix_to_postfix("-(2 + 3)").unwrap(), "2 3 + ~");
    }

    #[test]
    fn identifiers_tokenize_with_underscores() {
        assert_eq!(infix_to_postfix("my_var + 1").unwrap(), "my_var 1 +");
    }

    #[test]
    fn unmatched_parens_are_rejected() {
        assert!(matches!(
            infix_to_postfix("(3 + 4").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
        assert!(matches!(
            infix_to_postfix("3 + 4)").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn evaluate_literals_and_operators() {
        let interp = Interpreter::new();
        assert_eq!(interp.evaluate("3 + 4 * 2").unwrap(), 11);
        assert_eq!(interp.evaluate("(3 + 4) * 2").unwrap(), 14);
        assert_eq!(interp.evaluate("-5 + 3").unwrap(), -2);
        assert_eq!(interp.evaluate("17 % 5").unwrap(), 2);
        assert_eq!(interp.evaluate("7 / 2").unwrap(), 3);
    }

    #[test]
    fn division_and_modulo_by_zero_fail() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("1 / 0").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
        assert!(matches!(
            interp.evaluate("1 % (2 - 2)").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn blank_input_fails() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("   ").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn insufficient_operands_fail() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("1 +").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn adjacent_operands_are_an_invalid_expression() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("2 (3)").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn unknown_operator_fails() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("1 & 2").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn undeclared_identifier_propagates_store_error() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("x + 1").unwrap_err(),
            RuntimeError::UndeclaredVariable { .. }
        ));
    }

    #[test]
    fn oversized_literal_fails() {
        let interp = Interpreter::new();
        assert!(matches!(
            interp.evaluate("99999999999").unwrap_err(),
            RuntimeError::EvaluationError { .. }
        ));
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        let interp = Interpreter::new();
        assert_eq!(
            interp.evaluate("2147483647 + 1").unwrap(),
            i32::MIN
        );
    }
}
