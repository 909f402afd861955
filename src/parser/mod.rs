//! Parser module: parsing and evaluation in one pass.
//!
//! Expressions are parsed by precedence climbing over the levels of the
//! operator registry, and every reduction is evaluated on the spot:
//!
//! - `parser` - the `Parser` instance and its `evaluate` entry point
//! - `stmt` - the `;` separated statement list
//! - `expr` - the level, prefix, parenthesis and atom rules

pub mod expr;
pub mod parser;
pub mod stmt;
