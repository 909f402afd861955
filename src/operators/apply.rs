use crate::{binding::binding::Binding, errors::errors::ErrorImpl};

use super::{factorial::FactorialCache, operators::Operator};

/// Applies `operator` to already evaluated operands.
///
/// Computed results come back as fresh fixed bindings. Assignments and prefix
/// updates write through the operand and hand the operand binding back.
pub fn apply(
    operator: Operator,
    operands: &[Binding],
    factorials: &mut FactorialCache,
) -> Result<Binding, ErrorImpl> {
    let info = operator.info();
    let invalid_arity = || ErrorImpl::InvalidArity {
        operator: info.symbol.to_string(),
        expected: info.arity,
        received: operands.len(),
    };

    if operands.len() != info.arity {
        return Err(invalid_arity());
    }

    match operands {
        [operand] => apply_unary(operator, operand, factorials).ok_or_else(invalid_arity)?,
        [left, right] => apply_binary(operator, left, right).ok_or_else(invalid_arity)?,
        _ => Err(invalid_arity()),
    }
}

fn apply_unary(
    operator: Operator,
    operand: &Binding,
    factorials: &mut FactorialCache,
) -> Option<Result<Binding, ErrorImpl>> {
    let value = operand.read();
    let symbol = operator.symbol();

    let result = match operator {
        Operator::Factorial => Ok(Binding::fixed(factorials.factorial(value))),
        Operator::Plus => Ok(Binding::fixed(value)),
        Operator::Negate => Ok(Binding::fixed(-value)),
        Operator::Not => Ok(Binding::fixed(from_bool(!is_truthy(value)))),
        Operator::BitNot => Ok(Binding::fixed(!to_int32(value) as f64)),
        Operator::PreIncrement => operand
            .write(value + 1.0, symbol)
            .map(|_| operand.clone()),
        Operator::PreDecrement => operand
            .write(value - 1.0, symbol)
            .map(|_| operand.clone()),
        Operator::PostIncrement => operand
            .write(value + 1.0, symbol)
            .map(|_| Binding::fixed(value)),
        Operator::PostDecrement => operand
            .write(value - 1.0, symbol)
            .map(|_| Binding::fixed(value)),
        _ => return None,
    };

    Some(result)
}

fn apply_binary(
    operator: Operator,
    left: &Binding,
    right: &Binding,
) -> Option<Result<Binding, ErrorImpl>> {
    let result = match operator {
        Operator::Comma => Ok(right.clone()),
        Operator::Assign => assign(left, right.read(), operator),
        _ => match operator.compound_base() {
            Some(base) => {
                let value = arithmetic(base, left.read(), right.read())?;
                assign(left, value, operator)
            }
            None => Ok(Binding::fixed(arithmetic(
                operator,
                left.read(),
                right.read(),
            )?)),
        },
    };

    Some(result)
}

fn assign(target: &Binding, value: f64, operator: Operator) -> Result<Binding, ErrorImpl> {
    target.write(value, operator.symbol())?;
    tracing::trace!(operator = operator.symbol(), value, "assigned");
    Ok(target.clone())
}

/// The numeric rule of a non-assigning binary operator.
fn arithmetic(operator: Operator, a: f64, b: f64) -> Option<f64> {
    let value = match operator {
        // Both sides were evaluated before we got here: no short circuit.
        Operator::Or => {
            if is_truthy(a) {
                a
            } else {
                b
            }
        }
        Operator::And => {
            if is_truthy(a) {
                b
            } else {
                a
            }
        }

        Operator::BitOr => (to_int32(a) | to_int32(b)) as f64,
        Operator::BitXor => (to_int32(a) ^ to_int32(b)) as f64,
        Operator::BitAnd => (to_int32(a) & to_int32(b)) as f64,

        Operator::Equals | Operator::StrictEquals => from_bool(a == b),
        Operator::NotEquals | Operator::StrictNotEquals => from_bool(a != b),

        Operator::Less => from_bool(a < b),
        Operator::LessEquals => from_bool(a <= b),
        Operator::Greater => from_bool(a > b),
        Operator::GreaterEquals => from_bool(a >= b),

        Operator::Shl => to_int32(a).wrapping_shl(shift_count(b)) as f64,
        Operator::Shr => to_int32(a).wrapping_shr(shift_count(b)) as f64,
        Operator::UShr => to_uint32(a).wrapping_shr(shift_count(b)) as f64,

        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        Operator::Rem => a % b,
        Operator::Pow => power(a, b),

        _ => return None,
    };

    Some(value)
}

/// `a ** b` with NaN for `1 ** NaN` and `(±1) ** ±Infinity`, where `powf` gives 1.
pub fn power(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }

    a.powf(b)
}

pub fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

fn from_bool(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// 32-bit unsigned coercion: non-finite values become 0, the rest are
/// truncated and wrapped modulo 2^32.
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }

    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

pub fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

fn shift_count(value: f64) -> u32 {
    to_uint32(value) & 31
}
