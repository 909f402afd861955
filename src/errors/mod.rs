//! Error types and error handling for the evaluator.
//!
//! This module defines the error types returned by `evaluate`. It includes:
//!
//! - Error structures carrying the byte offset of the failure
//! - Specific error variants for scanning, binding and operator failures
//! - A coarse `ErrorKind` for callers that only care about the failure class
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
