//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ExpectedOperand {
            found: "`#`".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "ExpectedOperand");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            found: "`x`".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_syntax_error_kinds() {
    let syntax_errors = vec![
        ErrorImpl::ExpectedOperand {
            found: "end of input".to_string(),
        },
        ErrorImpl::UnclosedParenthesis {
            found: "end of input".to_string(),
        },
        ErrorImpl::UnexpectedCharacter {
            found: "`2`".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "1e".to_string(),
        },
    ];

    for error_impl in syntax_errors {
        assert_eq!(Error::new(error_impl, Position(0)).kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_immutable_binding_error() {
    let error = Error::new(
        ErrorImpl::ImmutableBinding {
            operator: "+=".to_string(),
        },
        Position(5),
    );

    assert_eq!(error.get_error_name(), "ImmutableBinding");
    assert_eq!(error.kind(), ErrorKind::ImmutableBinding);
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_invalid_arity_error() {
    let error = Error::new(
        ErrorImpl::InvalidArity {
            operator: "+".to_string(),
            expected: 2,
            received: 1,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "InvalidArity");
    assert_eq!(error.kind(), ErrorKind::Arity);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnclosedParenthesis {
            found: "end of input".to_string(),
        },
        Position(4),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(msg) => {
            assert!(msg.contains("`)`"));
            assert!(msg.contains("end of input"));
        }
        ErrorTip::None => panic!("Expected suggestion"),
    }
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(
        ErrorTip::Suggestion("close it".to_string()).to_string(),
        "close it"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnclosedParenthesis {
            found: "end of input".to_string(),
        },
        Position(4),
    );

    assert_eq!(
        error.to_string(),
        "expected closing parenthesis, found end of input at offset 4"
    );
}

#[test]
fn test_error_clone() {
    let error = Error::new(
        ErrorImpl::ImmutableBinding {
            operator: "=".to_string(),
        },
        Position(3),
    );

    let cloned = error.clone();
    assert_eq!(cloned.get_error_name(), error.get_error_name());
    assert_eq!(cloned.get_position(), error.get_position());
    assert_eq!(cloned.get_internal_error(), error.get_internal_error());
}
