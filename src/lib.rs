//! # Introduction
//!
//! blockrun executes tiny imperative programs assembled from ordered
//! "blocks" of pseudo-code text: variable declarations, assignments,
//! arithmetic expressions, and `if`/`while`/`for` statements.  Each block
//! holds a raw code string that is re-parsed on every execution; nothing is
//! compiled to an AST ahead of time.
//!
//! ## Execution pipeline
//!
//! ```text
//! Fragments → Program → Interpreter → RunReport (variables + trace + outcomes)
//! ```
//!
//! 1. [`program`] — the data model: [`program::Fragment`] (a typed code
//!    string) and [`program::Program`] (the ordered sequence to execute).
//! 2. [`store`] — the mutable variable store: identifier → `i32`, with
//!    declare-once and declare-before-use invariants.
//! 3. [`interpreter`] — the execution engine: shunting-yard expression
//!    evaluation, condition splitting, statement dispatch, and bounded
//!    loops.
//! 4. [`report`] — the result of one run: final variable snapshot, the
//!    human-readable trace, and one outcome per fragment.
//!
//! ## Supported pseudo-code
//!
//! Values: signed 32-bit integers only, wrapping on overflow.
//! Expressions: `+ - * / %`, unary minus, parentheses, identifiers.
//! Conditions: `>= <= != == > <` over expressions, or a bare expression
//! treated as "nonzero is true".
//! Statements: `int a, b`, `x = expr`, bare expressions, `if/else`,
//! `while`, `for` — loops are capped at 1000 iterations.

pub mod interpreter;
pub mod program;
pub mod report;
pub mod store;
