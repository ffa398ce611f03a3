//! Program data model
//!
//! This module defines the units the interpreter consumes:
//! - [`FragmentKind`]: the six block kinds a program can contain
//! - [`Fragment`]: one block, a kind tag plus its raw code string
//! - [`Program`]: the ordered sequence of fragments, insertion order =
//!   execution order
//!
//! A fragment's `code` is free-form text, not a pre-parsed tree; the
//! interpreter re-parses it on every execution.  Fragments arrive fully
//! formed from the editor front-end, which validates that the text is
//! syntactically plausible for its kind before admitting it.

use std::fmt;

/// The kind of one program block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// `int a, b, c` — declares each listed name with initial value 0.
    VarDecl,
    /// `x = expr` — evaluates the right side and stores it.
    Assign,
    /// A bare expression evaluated for its value; no state mutation.
    Arithmetic,
    /// `if (cond) { ... }` with an optional `else { ... }`.
    If,
    /// `while (cond) { ... }`, capped at 1000 iterations.
    While,
    /// `for (init; cond; incr) { ... }`, capped at 1000 iterations.
    For,
}

impl FragmentKind {
    /// Human-readable name used in trace headers and error reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            FragmentKind::VarDecl => "variable declaration",
            FragmentKind::Assign => "assignment",
            FragmentKind::Arithmetic => "arithmetic",
            FragmentKind::If => "if statement",
            FragmentKind::While => "while loop",
            FragmentKind::For => "for loop",
        }
    }

    /// Parses the keyword used by the CLI block-file format.
    pub fn from_keyword(keyword: &str) -> Option<FragmentKind> {
        match keyword {
            "decl" => Some(FragmentKind::VarDecl),
            "assign" => Some(FragmentKind::Assign),
            "expr" => Some(FragmentKind::Arithmetic),
            "if" => Some(FragmentKind::If),
            "while" => Some(FragmentKind::While),
            "for" => Some(FragmentKind::For),
            _ => None,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One block of the assembled program: a kind tag and its code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub code: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, code: impl Into<String>) -> Self {
        Fragment {
            kind,
            code: code.into(),
        }
    }
}

/// The ordered sequence of fragments executed top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Program {
    fragments: Vec<Fragment>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment; execution order is insertion order.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl From<Vec<Fragment>> for Program {
    fn from(fragments: Vec<Fragment>) -> Self {
        Program { fragments }
    }
}
