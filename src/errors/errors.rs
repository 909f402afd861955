use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{} at offset {}", .internal_error, .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The three failure classes an `evaluate` call can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    ImmutableBinding,
    Arity,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::ExpectedOperand { .. }
            | ErrorImpl::UnclosedParenthesis { .. }
            | ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
            ErrorImpl::ImmutableBinding { .. } => ErrorKind::ImmutableBinding,
            ErrorImpl::InvalidArity { .. } => ErrorKind::Arity,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedOperand { .. } => "ExpectedOperand",
            ErrorImpl::UnclosedParenthesis { .. } => "UnclosedParenthesis",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ImmutableBinding { .. } => "ImmutableBinding",
            ErrorImpl::InvalidArity { .. } => "InvalidArity",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedOperand { found } => ErrorTip::Suggestion(format!(
                "Expected a number or identifier, found {}",
                found
            )),
            ErrorImpl::UnclosedParenthesis { found } => ErrorTip::Suggestion(format!(
                "Expected `)`, found {}, did you forget to close a parenthesis?",
                found
            )),
            ErrorImpl::UnexpectedCharacter { found } => ErrorTip::Suggestion(format!(
                "Unexpected {}, did you miss a semicolon or an operator?",
                found
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::ImmutableBinding { operator } => ErrorTip::Suggestion(format!(
                "The left side of `{}` must be a variable, not a constant or computed value",
                operator
            )),
            ErrorImpl::InvalidArity { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected number or identifier, found {found}")]
    ExpectedOperand { found: String },
    #[error("expected closing parenthesis, found {found}")]
    UnclosedParenthesis { found: String },
    #[error("unexpected {found}")]
    UnexpectedCharacter { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("cannot apply {operator:?} to an immutable binding")]
    ImmutableBinding { operator: String },
    #[error("operator {operator:?} takes {expected} operands, received {received}")]
    InvalidArity {
        operator: String,
        expected: usize,
        received: usize,
    },
}
