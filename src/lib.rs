#![allow(clippy::module_inception)]

use std::{
    io::{self, Write},
    sync::Once,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod binding;
pub mod cli;
pub mod errors;
pub mod macros;
pub mod operators;
pub mod parser;
pub mod scanner;

extern crate regex;

pub use parser::parser::Parser;

/// Byte offset into the evaluated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

/// Evaluates `source` on a fresh parser instance.
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Parser::new().evaluate(source)
}

static TRACING_INIT: Once = Once::new();

/// Installs a fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Formats a result the way scripting languages print numbers.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value == f64::INFINITY {
        String::from("Infinity")
    } else if value == f64::NEG_INFINITY {
        String::from("-Infinity")
    } else {
        format!("{}", value)
    }
}

/// Finds the line holding byte `position` of `source`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at the very end of the text
/// belongs to the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) || (end == source.len() && position == end) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, String::new(), 0))
}


pub fn display_error<W: Write>(
    out: &mut W,
    error: &Error,
    source: &str,
    name: &str,
) -> io::Result<()> {
    /*
        Error: ImmutableBinding (The left side of `=` must be a variable, ...)
        -> <stdin>
          |
        1 | true = 0
          | -----^
    */

    let position = error.get_position().0;
    let (line, line_text, line_pos) =
        get_line_at_position(source, position).unwrap_or((1, String::from(source), 0));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", name)?;
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    // The caret is placed in characters, the position is in bytes.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
