use lazy_static::lazy_static;
use regex::Regex;

use crate::operators::operators::{ALL_SYMBOLS, POSTFIX_LOOKUP, PREFIX_LOOKUP};

// Every pattern starts with `^`: the scanner matches against the unconsumed
// suffix, so the anchor pins the match to the cursor.
lazy_static! {
    pub static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
    pub static ref NUMBER: Regex =
        Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][0-9]+)?").unwrap();
    pub static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*").unwrap();
    pub static ref OPEN_PAREN: Regex = Regex::new(r"^\(").unwrap();
    pub static ref CLOSE_PAREN: Regex = Regex::new(r"^\)").unwrap();
    pub static ref SEPARATOR: Regex = Regex::new(r"^;(?:\s*;)*").unwrap();
    pub static ref PREFIX_OPERATOR: Regex =
        symbol_pattern(&PREFIX_LOOKUP.keys().copied().collect::<Vec<_>>());
    pub static ref POSTFIX_OPERATOR: Regex =
        symbol_pattern(&POSTFIX_LOOKUP.keys().copied().collect::<Vec<_>>());
    pub static ref OPERATOR: Regex = symbol_pattern(&ALL_SYMBOLS);
}

/// Builds an anchored alternation over `symbols`, longest first.
///
/// The regex crate picks the leftmost alternative that matches, so ordering by
/// length makes `>>>=` win over `>>>`, `>>` and `>`.
pub fn symbol_pattern(symbols: &[&str]) -> Regex {
    let mut sorted = symbols.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted.dedup();

    let alternation = sorted
        .iter()
        .map(|symbol| regex::escape(symbol))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("^(?:{})", alternation)).unwrap()
}
