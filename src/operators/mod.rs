//! The operator registry.
//!
//! - `operators` - operator tags, their descriptors and the precedence levels
//! - `apply` - the evaluation rule behind every operator
//! - `factorial` - the memoized factorial used by postfix `!`

pub mod apply;
pub mod factorial;
pub mod operators;

#[cfg(test)]
mod tests;
