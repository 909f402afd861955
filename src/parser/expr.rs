use crate::{
    binding::binding::Binding,
    errors::errors::{Error, ErrorImpl},
    operators::operators::{
        leveled_operator, Associativity, Level, Operator, POSTFIX_LOOKUP, PREFIX_LOOKUP,
    },
    scanner::{
        patterns::{
            CLOSE_PAREN, IDENTIFIER, NUMBER, OPEN_PAREN, OPERATOR, POSTFIX_OPERATOR,
            PREFIX_OPERATOR,
        },
        scanner::Scanner,
    },
    Position,
};

use super::parser::Parser;

/// Parses and evaluates one expression at `level` and everything above it.
///
/// After the first operand, operators of this level are consumed greedily. A
/// right associative operator takes its right operand from this same level, a
/// left associative one from the next level up.
pub fn parse_expr(
    parser: &mut Parser,
    scanner: &mut Scanner,
    level: Level,
) -> Result<Binding, Error> {
    let mut left = parse_operand(parser, scanner, level)?;

    while let Some((operator, position)) = match_operator(scanner, level) {
        let info = operator.info();

        let operands = match info.arity {
            1 => vec![left],
            _ => {
                let right = match info.associativity {
                    Associativity::Right => parse_expr(parser, scanner, level)?,
                    Associativity::Left => parse_operand(parser, scanner, level)?,
                };
                vec![left, right]
            }
        };

        left = apply_at(parser, operator, &operands, position)?;
    }

    Ok(left)
}

fn parse_operand(
    parser: &mut Parser,
    scanner: &mut Scanner,
    level: Level,
) -> Result<Binding, Error> {
    match level.next() {
        Some(next) => parse_expr(parser, scanner, next),
        None => parse_prefix(parser, scanner),
    }
}

fn match_operator(scanner: &mut Scanner, level: Level) -> Option<(Operator, Position)> {
    let position = scanner.get_position();
    let symbol = scanner.try_match_where(&OPERATOR, |symbol| {
        leveled_operator(symbol, level).is_some()
    })?;

    leveled_operator(symbol, level).map(|operator| (operator, position))
}

/// Prefix operators chain to the right: `- - x`, `!~x`, `++x`.
pub fn parse_prefix(parser: &mut Parser, scanner: &mut Scanner) -> Result<Binding, Error> {
    let position = scanner.get_position();

    if let Some(symbol) = scanner.try_match(&PREFIX_OPERATOR) {
        if let Some(operator) = PREFIX_LOOKUP.get(symbol).copied() {
            let operand = parse_prefix(parser, scanner)?;
            return apply_at(parser, operator, &[operand], position);
        }
    }

    parse_parenthesized(parser, scanner)
}

pub fn parse_parenthesized(parser: &mut Parser, scanner: &mut Scanner) -> Result<Binding, Error> {
    if scanner.try_match(&OPEN_PAREN).is_none() {
        return parse_atom(parser, scanner);
    }

    let value = parse_expr(parser, scanner, Level::LOWEST)?;

    if scanner.try_match(&CLOSE_PAREN).is_none() {
        return Err(Error::new(
            ErrorImpl::UnclosedParenthesis {
                found: scanner.describe_next(),
            },
            scanner.get_position(),
        ));
    }

    Ok(value)
}

pub fn parse_atom(parser: &mut Parser, scanner: &mut Scanner) -> Result<Binding, Error> {
    let position = scanner.get_position();

    if let Some(literal) = scanner.try_match(&NUMBER) {
        return literal.parse::<f64>().map(Binding::fixed).map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: literal.to_string(),
                },
                position,
            )
        });
    }

    if let Some(name) = scanner.try_match(&IDENTIFIER) {
        let binding = parser.lookup(name);
        if binding.is_mutable() {
            return parse_postfix(parser, scanner, binding);
        }
        return Ok(binding);
    }

    Err(Error::new(
        ErrorImpl::ExpectedOperand {
            found: scanner.describe_next(),
        },
        position,
    ))
}

/// At most one `++`/`--` directly after a variable.
fn parse_postfix(
    parser: &mut Parser,
    scanner: &mut Scanner,
    binding: Binding,
) -> Result<Binding, Error> {
    let position = scanner.get_position();

    match scanner
        .try_match(&POSTFIX_OPERATOR)
        .and_then(|symbol| POSTFIX_LOOKUP.get(symbol).copied())
    {
        Some(operator) => apply_at(parser, operator, &[binding], position),
        None => Ok(binding),
    }
}

fn apply_at(
    parser: &mut Parser,
    operator: Operator,
    operands: &[Binding],
    position: Position,
) -> Result<Binding, Error> {
    parser
        .apply(operator, operands)
        .map_err(|error| Error::new(error, position))
}
