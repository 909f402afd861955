//! Command line front end.
//!
//! The binary in `main.rs` only parses arguments and hands locked stdio to
//! these functions, so everything they print can be captured in tests.

pub mod cli;
