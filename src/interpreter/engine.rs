//! Main interpreter driving one program run
//!
//! [`Interpreter`] owns the [`VariableStore`] and the execution trace for
//! the run in flight.  [`Interpreter::run`] clears both, then executes the
//! program's fragments strictly in order, dispatching on fragment kind.
//!
//! # Error scope
//!
//! A fragment's failure is caught here, traced, and recorded as that
//! fragment's outcome; the run then continues with the next fragment.  The
//! narrower scope — a failing statement aborting the rest of its enclosing
//! `if`/`while`/`for` body — is handled in the statement and loop modules,
//! which propagate the error up to this catch point.
//!
//! The statement, expression, condition, and loop methods live in their own
//! files as `impl Interpreter` blocks, sharing the store and trace through
//! `self`.

use crate::interpreter::errors::RuntimeError;
use crate::program::{Fragment, FragmentKind, Program};
use crate::report::{FragmentOutcome, RunReport};
use crate::store::VariableStore;

/// Executes programs against a single exclusively-owned variable store.
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) store: VariableStore,
    pub(crate) trace: Vec<String>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variable store as left by the most recent run.
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// The trace lines produced by the most recent run.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Runs `program` from a clean store and returns the final variable
    /// snapshot, the full trace, and one outcome per fragment.
    ///
    /// A fragment that fails is recorded and execution continues with the
    /// next fragment; the run never aborts wholesale.
    pub fn run(&mut self, program: &Program) -> RunReport {
        self.store.clear();
        self.trace.clear();

        let mut outcomes = Vec::with_capacity(program.len());

        for (index, fragment) in program.fragments().iter().enumerate() {
            self.trace
                .push(format!("Block #{} ({}):", index + 1, fragment.kind));

            match self.execute_fragment(fragment) {
                Ok(result) => outcomes.push(FragmentOutcome::Succeeded { result }),
                Err(error) => {
                    self.trace.push(format!(
                        "  Error in block #{} ({}): {}",
                        index + 1,
                        fragment.kind,
                        error
                    ));
                    outcomes.push(FragmentOutcome::Failed { error });
                }
            }
        }

        RunReport {
            variables: self.store.snapshot(),
            trace: self.trace.clone(),
            outcomes,
        }
    }

    /// Dispatches a single fragment.  Returns the computed value for
    /// `Arithmetic` fragments, `None` for everything else.
    fn execute_fragment(&mut self, fragment: &Fragment) -> Result<Option<i32>, RuntimeError> {
        match fragment.kind {
            FragmentKind::VarDecl => {
                self.execute_var_decl(&fragment.code)?;
                Ok(None)
            }
            FragmentKind::Assign => {
                let code = fragment.code.trim();
                self.execute_assignment(code)?;
                self.trace.push(format!("  Assigned: {}", code));
                Ok(None)
            }
            FragmentKind::Arithmetic => {
                let value = self.evaluate(&fragment.code)?;
                self.trace
                    .push(format!("  Evaluated: {} = {}", fragment.code.trim(), value));
                Ok(Some(value))
            }
            FragmentKind::If => {
                self.execute_if(&fragment.code)?;
                Ok(None)
            }
            FragmentKind::While => {
                self.execute_while(&fragment.code)?;
                Ok(None)
            }
            FragmentKind::For => {
                self.execute_for(&fragment.code)?;
                Ok(None)
            }
        }
    }
}
