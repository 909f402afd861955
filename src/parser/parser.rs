//! The evaluating parser.
//!
//! There is no syntax tree: every rule in `expr` computes its value as soon as
//! its operands are known. The `Parser` is the long-lived half of that work. It
//! owns the variable environment and the factorial cache, both of which
//! survive from one `evaluate` call to the next. The scanner lives only for a
//! single call.

use crate::{
    binding::{binding::Binding, environment::Environment},
    errors::errors::{Error, ErrorImpl},
    operators::{apply::apply, factorial::FactorialCache, operators::Operator},
    scanner::scanner::Scanner,
    Position,
};

use super::stmt::parse_statements;

/// An evaluator instance with its own variables.
#[derive(Debug, Default)]
pub struct Parser {
    /// Named constants and every variable declared so far
    environment: Environment,
    /// `n!` results computed so far
    factorials: FactorialCache,
}

impl Parser {
    /// Creates a parser whose environment holds only the named constants.
    pub fn new() -> Self {
        Parser {
            environment: Environment::new(),
            factorials: FactorialCache::new(),
        }
    }

    /// Evaluates a `;` separated list of expressions and returns the last value.
    ///
    /// Assignments made before a failure are kept: the environment is not
    /// rolled back when an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use exprlang::parser::parser::Parser;
    ///
    /// let mut parser = Parser::new();
    /// assert_eq!(parser.evaluate("x = 5; x + 1").unwrap(), 6.0);
    /// assert_eq!(parser.evaluate("x").unwrap(), 5.0);
    /// ```
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn evaluate(&mut self, source: &str) -> Result<f64, Error> {
        let mut scanner = Scanner::new(source);
        let result = parse_statements(self, &mut scanner)?;

        Ok(result.read())
    }

    /// Reads a variable or constant without declaring it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.environment.get(name).map(Binding::read)
    }

    /// Assigns `value` to the variable `name`, declaring it if needed.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), Error> {
        self.environment
            .lookup(name)
            .write(value, Operator::Assign.symbol())
            .map_err(|error| Error::new(error, Position(0)))
    }

    pub(crate) fn lookup(&mut self, name: &str) -> Binding {
        self.environment.lookup(name)
    }

    pub(crate) fn apply(
        &mut self,
        operator: Operator,
        operands: &[Binding],
    ) -> Result<Binding, ErrorImpl> {
        apply(operator, operands, &mut self.factorials)
    }
}
