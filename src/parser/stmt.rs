use crate::{
    binding::binding::Binding,
    errors::errors::{Error, ErrorImpl},
    operators::operators::Level,
    scanner::{patterns::SEPARATOR, scanner::Scanner},
};

use super::{expr::parse_expr, parser::Parser};

/// Parses `expr (';'+ expr?)*` and returns the binding of the last expression.
///
/// Earlier results are dropped; their effects on the environment stay.
pub fn parse_statements(parser: &mut Parser, scanner: &mut Scanner) -> Result<Binding, Error> {
    let mut result = parse_expr(parser, scanner, Level::LOWEST)?;
    let mut count = 1;

    while !scanner.at_eof() {
        if scanner.try_match(&SEPARATOR).is_none() {
            return Err(Error::new(
                ErrorImpl::UnexpectedCharacter {
                    found: scanner.describe_next(),
                },
                scanner.get_position(),
            ));
        }

        if !scanner.at_eof() {
            result = parse_expr(parser, scanner, Level::LOWEST)?;
            count += 1;
        }
    }

    tracing::debug!(statements = count, "evaluated statement list");
    Ok(result)
}
