//! Statement execution implementation
//!
//! This module handles the non-loop statement forms:
//!
//! - Variable declarations (`int a, b, c`)
//! - Assignments (`x = expr`), shared by `for` init/increment and bodies
//! - `if`/`else` dispatch
//! - Nested body execution for `if`/`while`/`for`
//!
//! # Body re-parsing
//!
//! Bodies are extracted textually on every execution: the condition is the
//! text between the first `(` and the next `)`, the body the text between
//! the first `{` and the last `}`.  A body is a `;`-separated list of bare
//! statements; a statement containing `=` runs as an assignment, anything
//! else is evaluated as an expression.  The first failing statement traces
//! an error line and aborts the rest of that body.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;

impl Interpreter {
    /// Executes a declaration fragment: strips the leading `int`, splits on
    /// commas, and declares each non-empty trimmed name.
    pub(crate) fn execute_var_decl(&mut self, code: &str) -> Result<(), RuntimeError> {
        let trimmed = code.trim();
        let names = trimmed.strip_prefix("int").unwrap_or(trimmed);

        let mut declared: Vec<&str> = Vec::new();
        for part in names.split(',') {
            let name = part.trim();
            if name.is_empty() {
                continue;
            }
            self.store.declare(name)?;
            declared.push(name);
        }

        if !declared.is_empty() {
            self.trace
                .push(format!("  Declared variables: {}", declared.join(", ")));
        }
        Ok(())
    }

    /// Executes `name = expression`: splits at the first `=`, evaluates the
    /// right side, and stores it under the trimmed left side.
    ///
    /// Callers trace the assignment themselves; `for` init/increment and
    /// body statements word their trace lines differently.
    pub(crate) fn execute_assignment(&mut self, code: &str) -> Result<(), RuntimeError> {
        let Some((name, expression)) = code.split_once('=') else {
            return Err(RuntimeError::MalformedAssignment {
                code: code.trim().to_string(),
            });
        };

        let value = self.evaluate(expression)?;
        self.store.set(name.trim(), value)
    }

    /// Executes an `if (cond) { ... } [else { ... }]` fragment.
    pub(crate) fn execute_if(&mut self, code: &str) -> Result<(), RuntimeError> {
        let condition = parenthesized(code)
            .ok_or_else(missing_condition)?
            .trim();
        let then_body = block_body(code);

        let met = self.evaluate_condition(condition)?;
        self.trace.push(format!(
            "  Condition: {} is {}",
            condition,
            if met { "true" } else { "false" }
        ));

        if met {
            self.trace.push("  Executing if branch:".to_string());
            self.execute_body(then_body)?;
        } else if let Some(index) = code.find("else") {
            self.trace.push("  Executing else branch:".to_string());
            self.execute_body(block_body(&code[index..]))?;
        }
        Ok(())
    }

    /// Executes the `;`-separated statements of one nested body.
    ///
    /// The first failure traces an error line, aborts the remaining
    /// statements, and propagates to the enclosing fragment.
    pub(crate) fn execute_body(&mut self, body: &str) -> Result<(), RuntimeError> {
        if body.is_empty() {
            return Ok(());
        }

        for statement in body.split(';') {
            let trimmed = statement.trim();
            if trimmed.is_empty() {
                continue;
            }

            let outcome = if trimmed.contains('=') {
                match self.execute_assignment(trimmed) {
                    Ok(()) => {
                        self.trace.push(format!("    Executed: {}", trimmed));
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            } else {
                match self.evaluate(trimmed) {
                    Ok(value) => {
                        self.trace
                            .push(format!("    Evaluated: {} = {}", trimmed, value));
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            };

            if let Err(error) = outcome {
                self.trace
                    .push(format!("    Error in '{}': {}", trimmed, error));
                return Err(error);
            }
        }
        Ok(())
    }
}

/// The text between the first `(` and the next `)`, if both exist.
pub(crate) fn parenthesized(code: &str) -> Option<&str> {
    let open = code.find('(')?;
    let rest = &code[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

/// The trimmed text between the first `{` and the last `}` of `code`;
/// empty when the braces are missing or inverted.
pub(crate) fn block_body(code: &str) -> &str {
    match (code.find('{'), code.rfind('}')) {
        (Some(open), Some(close)) if open + 1 <= close => code[open + 1..close].trim(),
        _ => "",
    }
}

/// Validated front-ends never admit an `if`/`while` without parentheses,
/// but a hand-built fragment must still fail cleanly.
pub(crate) fn missing_condition() -> RuntimeError {
    RuntimeError::EvaluationError {
        message: "Missing parenthesized condition".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parenthesized_takes_first_pair() {
        assert_eq!(parenthesized("if (x > 5) { y = (1) }"), Some("x > 5"));
        assert_eq!(parenthesized("while ()"), Some(""));
        assert_eq!(parenthesized("no parens"), None);
        assert_eq!(parenthesized("open ( only"), None);
    }

    #[test]
    fn block_body_spans_first_open_to_last_close() {
        assert_eq!(block_body("while (1) { x = 1; y = 2 }"), "x = 1; y = 2");
        assert_eq!(block_body("{ }"), "");
        assert_eq!(block_body("no braces"), "");
        assert_eq!(block_body("} inverted {"), "");
    }

    #[test]
    fn declaration_declares_each_listed_name() {
        let mut interp = Interpreter::new();
        interp.execute_var_decl("int x, y, z").unwrap();
        assert_eq!(interp.store.get("x").unwrap(), 0);
        assert_eq!(interp.store.get("y").unwrap(), 0);
        assert_eq!(interp.store.get("z").unwrap(), 0);
    }

    #[test]
    fn declaration_skips_empty_entries() {
        let mut interp = Interpreter::new();
        interp.execute_var_decl("int a, , b,").unwrap();
        assert_eq!(interp.store.len(), 2);
    }

    #[test]
    fn declaration_with_no_names_traces_nothing() {
        let mut interp = Interpreter::new();
        interp.execute_var_decl("int ,").unwrap();
        assert!(interp.store.is_empty());
        assert!(interp.trace.is_empty());
    }

    #[test]
    fn duplicate_declaration_stops_mid_list() {
        let mut interp = Interpreter::new();
        interp.execute_var_decl("int a").unwrap();
        let err = interp.execute_var_decl("int b, a, c").unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateDeclaration { .. }));
        // b was declared before the failure; c never was.
        assert!(interp.store.contains("b"));
        assert!(!interp.store.contains("c"));
    }

    #[test]
    fn assignment_requires_equals_sign() {
        let mut interp = Interpreter::new();
        let err = interp.execute_assignment("x 5").unwrap_err();
        assert!(matches!(err, RuntimeError::MalformedAssignment { .. }));
    }

    #[test]
    fn assignment_evaluates_right_side() {
        let mut interp = Interpreter::new();
        interp.store.declare("x").unwrap();
        interp.execute_assignment("x = 2 + 3 * 4").unwrap();
        assert_eq!(interp.store.get("x").unwrap(), 14);
    }

    #[test]
    fn body_aborts_on_first_failure() {
        let mut interp = Interpreter::new();
        interp.store.declare("a").unwrap();
        interp.store.declare("b").unwrap();

        let err = interp.execute_body("a = 1; oops = 2; b = 3").unwrap_err();
        assert!(matches!(err, RuntimeError::UndeclaredVariable { .. }));
        assert_eq!(interp.store.get("a").unwrap(), 1);
        // The statement after the failure never ran.
        assert_eq!(interp.store.get("b").unwrap(), 0);
    }
}
