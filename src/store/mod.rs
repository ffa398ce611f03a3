//! Variable storage
//!
//! This module provides [`VariableStore`], the single mutable mapping from
//! identifier to signed 32-bit value used during one program run.
//!
//! # Invariants
//!
//! - Every variable is declared exactly once before any read or write;
//!   redeclaration fails with [`RuntimeError::DuplicateDeclaration`].
//! - Assignment never declares implicitly; writing an unknown name fails
//!   with [`RuntimeError::UndeclaredVariable`].
//! - Declaration initializes the value to 0.
//!
//! The store tracks insertion order alongside the map so that
//! [`VariableStore::snapshot`] reports variables in the order they were
//! declared.

use rustc_hash::FxHashMap;

use crate::interpreter::errors::RuntimeError;

/// Identifier → value mapping for one run, with insertion-order reporting.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values: FxHashMap<String, i32>,
    insertion_order: Vec<String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with initial value 0.
    ///
    /// Fails with [`RuntimeError::InvalidName`] for an empty or whitespace
    /// name and [`RuntimeError::DuplicateDeclaration`] if `name` is already
    /// present.
    pub fn declare(&mut self, name: &str) -> Result<(), RuntimeError> {
        if name.trim().is_empty() {
            return Err(RuntimeError::InvalidName);
        }
        if self.values.contains_key(name) {
            return Err(RuntimeError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), 0);
        self.insertion_order.push(name.to_string());
        Ok(())
    }

    /// Overwrites the value of a declared variable.
    pub fn set(&mut self, name: &str, value: i32) -> Result<(), RuntimeError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::UndeclaredVariable {
                name: name.to_string(),
            }),
        }
    }

    /// Reads the value of a declared variable.
    pub fn get(&self, name: &str) -> Result<i32, RuntimeError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndeclaredVariable {
                name: name.to_string(),
            })
    }

    /// Whether `name` has been declared.  Used by front-ends to validate
    /// fragments before admitting them into a program.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Removes all entries (start-of-run reset).
    pub fn clear(&mut self) {
        self.values.clear();
        self.insertion_order.clear();
    }

    /// Owned copy of all `(name, value)` pairs in declaration order.
    /// Mutating the copy never affects the store.
    pub fn snapshot(&self) -> Vec<(String, i32)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.values.get(name).map(|value| (name.clone(), *value)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
