use regex::Regex;

use crate::Position;

use super::patterns::WHITESPACE;

/// Cursor over the source text of one `evaluate` call.
///
/// The cursor always sits past any whitespace: it is skipped once on
/// construction and again after every successful match.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Scanner { source, pos: 0 };
        scanner.skip_whitespace();
        scanner
    }

    /// Tries to match `pattern` exactly at the cursor.
    ///
    /// On success the cursor moves past the match and any whitespace after it.
    /// On failure the cursor does not move.
    pub fn try_match(&mut self, pattern: &Regex) -> Option<&'src str> {
        self.try_match_where(pattern, |_| true)
    }

    /// Like `try_match`, but only consumes when `accept` approves the matched text.
    pub fn try_match_where<F>(&mut self, pattern: &Regex, accept: F) -> Option<&'src str>
    where
        F: FnOnce(&str) -> bool,
    {
        let matched = pattern.find(self.remaining())?;
        if matched.start() != 0 || !accept(matched.as_str()) {
            return None;
        }

        let start = self.pos;
        self.pos += matched.end();
        self.skip_whitespace();

        Some(&self.source[start..start + matched.end()])
    }

    /// The unconsumed suffix, leading whitespace already stripped.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    /// Describes what sits at the cursor, for error messages.
    pub fn describe_next(&self) -> String {
        match self.remaining().chars().next() {
            Some(c) => format!("`{}`", c),
            None => String::from("end of input"),
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remaining()) {
            self.pos += matched.end();
        }
    }
}
