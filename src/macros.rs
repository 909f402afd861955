//! Utility macros for the evaluator.
//!
//! - `MK_OPERATOR!` - Creates an OperatorInfo descriptor
//!
//! This keeps the operator table in `operators.rs` to one line per operator.

/// Creates an OperatorInfo descriptor.
///
/// # Arguments
///
/// * `$symbol` - The operator's source text
/// * `$arity` - How many operands `apply` receives
/// * `$assoc` - An `Associativity` variant name
/// * `$placement` - `Prefix`, `Postfix`, or a `Level` variant name
///
/// # Example
///
/// ```ignore
/// Operator::Add => MK_OPERATOR!("+", 2, Left, Additive),
/// Operator::Negate => MK_OPERATOR!("-", 1, Right, Prefix),
/// ```
#[macro_export]
macro_rules! MK_OPERATOR {
    ($symbol:literal, $arity:literal, $assoc:ident, Prefix) => {
        OperatorInfo {
            symbol: $symbol,
            arity: $arity,
            associativity: Associativity::$assoc,
            placement: Placement::Prefix,
        }
    };
    ($symbol:literal, $arity:literal, $assoc:ident, Postfix) => {
        OperatorInfo {
            symbol: $symbol,
            arity: $arity,
            associativity: Associativity::$assoc,
            placement: Placement::Postfix,
        }
    };
    ($symbol:literal, $arity:literal, $assoc:ident, $level:ident) => {
        OperatorInfo {
            symbol: $symbol,
            arity: $arity,
            associativity: Associativity::$assoc,
            placement: Placement::Leveled(Level::$level),
        }
    };
}
