//! Unit tests for the operator registry.

use pretty_assertions::assert_eq;

use crate::{binding::binding::Binding, errors::errors::ErrorImpl};

use super::{
    apply::{apply, is_truthy, power, to_int32, to_uint32},
    factorial::FactorialCache,
    operators::{
        leveled_operator, Associativity, Level, Operator, Placement, LEVELED_LOOKUP,
        POSTFIX_LOOKUP, PREFIX_LOOKUP,
    },
};

fn binary(operator: Operator, a: f64, b: f64) -> f64 {
    apply(
        operator,
        &[Binding::fixed(a), Binding::fixed(b)],
        &mut FactorialCache::new(),
    )
    .unwrap()
    .read()
}

#[test]
fn test_levels_are_ordered_lowest_first() {
    let mut level = Level::LOWEST;
    let mut count = 1;

    while let Some(next) = level.next() {
        assert!(next > level);
        level = next;
        count += 1;
    }

    assert_eq!(level, Level::Factorial);
    assert_eq!(count, 14);
}

#[test]
fn test_every_operator_is_registered_once() {
    assert_eq!(
        LEVELED_LOOKUP.len() + PREFIX_LOOKUP.len() + POSTFIX_LOOKUP.len(),
        Operator::ALL.len()
    );
}

#[test]
fn test_right_associative_operators() {
    for operator in Operator::ALL {
        let info = operator.info();
        let expected = match info.placement {
            Placement::Leveled(Level::Assignment) | Placement::Leveled(Level::Exponent) => {
                Associativity::Right
            }
            Placement::Prefix => Associativity::Right,
            _ => Associativity::Left,
        };
        assert_eq!(info.associativity, expected, "{}", info.symbol);
    }
}

#[test]
fn test_leveled_operator_lookup() {
    assert_eq!(leveled_operator("!", Level::Factorial), Some(Operator::Factorial));
    assert_eq!(leveled_operator("!", Level::Additive), None);
    assert_eq!(leveled_operator(">>>=", Level::Assignment), Some(Operator::UShrAssign));
    assert_eq!(leveled_operator("~", Level::Multiplicative), None);
    assert_eq!(PREFIX_LOOKUP.get("!"), Some(&Operator::Not));
    assert_eq!(POSTFIX_LOOKUP.get("--"), Some(&Operator::PostDecrement));
}

#[test]
fn test_int32_coercion() {
    assert_eq!(to_int32(5.9), 5);
    assert_eq!(to_int32(-1.5), -1);
    assert_eq!(to_int32(4_294_967_301.0), 5);
    assert_eq!(to_int32(2_147_483_648.0), -2_147_483_648);
    assert_eq!(to_int32(f64::NAN), 0);
    assert_eq!(to_int32(f64::INFINITY), 0);
    assert_eq!(to_uint32(-1.0), 4_294_967_295);
}

#[test]
fn test_truthiness() {
    assert!(is_truthy(1.0));
    assert!(is_truthy(-0.5));
    assert!(is_truthy(f64::INFINITY));
    assert!(!is_truthy(0.0));
    assert!(!is_truthy(-0.0));
    assert!(!is_truthy(f64::NAN));
}

#[test]
fn test_binary_arithmetic() {
    assert_eq!(binary(Operator::Add, 2.0, 3.0), 5.0);
    assert_eq!(binary(Operator::Rem, -7.0, 3.0), -1.0);
    assert_eq!(binary(Operator::Div, 1.0, 0.0), f64::INFINITY);
    assert!(binary(Operator::Div, 0.0, 0.0).is_nan());
    assert_eq!(binary(Operator::Pow, 2.0, 10.0), 1024.0);
    assert_eq!(binary(Operator::Shl, 1.0, 33.0), 2.0);
    assert_eq!(binary(Operator::Shr, -16.0, 2.0), -4.0);
    assert_eq!(binary(Operator::UShr, -1.0, 28.0), 15.0);
    assert_eq!(binary(Operator::BitXor, 6.0, 3.0), 5.0);
    assert_eq!(binary(Operator::StrictNotEquals, 1.0, 2.0), 1.0);
    assert_eq!(binary(Operator::LessEquals, 2.0, 2.0), 1.0);
    assert_eq!(binary(Operator::Or, 0.0, 4.0), 4.0);
    assert_eq!(binary(Operator::And, 3.0, 4.0), 4.0);
    assert_eq!(binary(Operator::Comma, 3.0, 4.0), 4.0);
}

#[test]
fn test_power_edge_cases() {
    assert!(power(1.0, f64::INFINITY).is_nan());
    assert!(power(-1.0, f64::NEG_INFINITY).is_nan());
    assert!(power(1.0, f64::NAN).is_nan());
    assert_eq!(power(f64::NAN, 0.0), 1.0);
    assert_eq!(power(0.5, f64::INFINITY), 0.0);
    assert_eq!(power(-2.0, 3.0), -8.0);
    assert!(binary(Operator::Pow, -1.0, f64::INFINITY).is_nan());
}

#[test]
fn test_computed_values_are_fresh_and_fixed() {
    let left = Binding::variable(2.0);
    let right = Binding::variable(3.0);

    let sum = apply(
        Operator::Add,
        &[left.clone(), right.clone()],
        &mut FactorialCache::new(),
    )
    .unwrap();

    assert!(!sum.is_mutable());
    assert_eq!(sum.read(), 5.0);
    assert!(!sum.same_cell(&left));
}

#[test]
fn test_assignment_returns_the_target() {
    let target = Binding::variable(2.0);

    let result = apply(
        Operator::MulAssign,
        &[target.clone(), Binding::fixed(4.0)],
        &mut FactorialCache::new(),
    )
    .unwrap();

    assert!(result.same_cell(&target));
    assert_eq!(target.read(), 8.0);
}

#[test]
fn test_assignment_to_fixed_binding_fails() {
    let result = apply(
        Operator::Assign,
        &[Binding::fixed(1.0), Binding::fixed(2.0)],
        &mut FactorialCache::new(),
    );

    assert_eq!(
        result.unwrap_err(),
        ErrorImpl::ImmutableBinding {
            operator: "=".to_string()
        }
    );
}

#[test]
fn test_increments() {
    let mut factorials = FactorialCache::new();
    let x = Binding::variable(5.0);

    let pre = apply(Operator::PreIncrement, &[x.clone()], &mut factorials).unwrap();
    assert!(pre.same_cell(&x));
    assert_eq!(x.read(), 6.0);

    let post = apply(Operator::PostDecrement, &[x.clone()], &mut factorials).unwrap();
    assert!(!post.is_mutable());
    assert_eq!(post.read(), 6.0);
    assert_eq!(x.read(), 5.0);
}

#[test]
fn test_operand_count_must_match_arity() {
    let result = apply(
        Operator::Add,
        &[Binding::fixed(1.0)],
        &mut FactorialCache::new(),
    );

    assert_eq!(
        result.unwrap_err(),
        ErrorImpl::InvalidArity {
            operator: "+".to_string(),
            expected: 2,
            received: 1,
        }
    );

    let result = apply(
        Operator::Negate,
        &[Binding::fixed(1.0), Binding::fixed(2.0)],
        &mut FactorialCache::new(),
    );
    assert!(matches!(
        result,
        Err(ErrorImpl::InvalidArity { expected: 1, received: 2, .. })
    ));
}

#[test]
fn test_factorial_cache() {
    let mut cache = FactorialCache::new();
    assert_eq!(cache.len(), 1);

    assert_eq!(cache.factorial(5.0), 120.0);
    assert_eq!(cache.len(), 6);

    assert_eq!(cache.factorial(3.0), 6.0);
    assert_eq!(cache.len(), 6);

    assert_eq!(cache.factorial(4.9), 24.0);
    assert_eq!(cache.factorial(0.0), 1.0);
    assert_eq!(cache.factorial(-3.0), 1.0);
    assert_eq!(cache.factorial(f64::NAN), 1.0);

    assert!(cache.factorial(170.0).is_finite());
    assert_eq!(cache.factorial(171.0), f64::INFINITY);
    assert_eq!(cache.len(), 171);
}
