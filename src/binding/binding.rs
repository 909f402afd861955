use std::{cell::Cell, rc::Rc};

use crate::errors::errors::ErrorImpl;

/// A value that may or may not be assignable.
///
/// Constants and every computed intermediate are `Fixed`. Named variables are
/// `Variable` cells shared with the environment, so writing through a binding
/// returned by a lookup updates the variable itself.
#[derive(Debug, Clone)]
pub enum Binding {
    Fixed(f64),
    Variable(Rc<Cell<f64>>),
}

impl Binding {
    pub fn fixed(value: f64) -> Self {
        Binding::Fixed(value)
    }

    pub fn variable(value: f64) -> Self {
        Binding::Variable(Rc::new(Cell::new(value)))
    }

    pub fn read(&self) -> f64 {
        match self {
            Binding::Fixed(value) => *value,
            Binding::Variable(cell) => cell.get(),
        }
    }

    pub fn is_mutable(&self) -> bool {
        matches!(self, Binding::Variable(_))
    }

    /// Replaces the value in place. `operator` names the write for the error.
    pub fn write(&self, value: f64, operator: &str) -> Result<(), ErrorImpl> {
        match self {
            Binding::Variable(cell) => {
                cell.set(value);
                Ok(())
            }
            Binding::Fixed(_) => Err(ErrorImpl::ImmutableBinding {
                operator: operator.to_string(),
            }),
        }
    }

    /// True when both bindings are the same variable cell.
    pub fn same_cell(&self, other: &Binding) -> bool {
        match (self, other) {
            (Binding::Variable(a), Binding::Variable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
