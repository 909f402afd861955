//! Scanning module for the evaluator.
//!
//! There is no token stream: the parser asks the scanner whether a pattern
//! matches at the cursor and consumes it on success. This module holds:
//!
//! - The `Scanner` cursor with anchored, whitespace-skipping matching
//! - The regex patterns for literals, identifiers, punctuation and operators

pub mod patterns;
pub mod scanner;
