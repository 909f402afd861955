//! Bindings and the variable environment.
//!
//! A binding is a number plus the knowledge of whether it may be written.
//! The environment maps identifiers to bindings for one parser instance.

pub mod binding;
pub mod environment;
