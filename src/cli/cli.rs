use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use crate::{display_error, format_number, Parser};

/// Exit status after an evaluation error.
pub const EXIT_EVALUATION_ERROR: u8 = 65;

/// Evaluates `source` once and prints the result to `out`.
///
/// On failure the diagnostic goes to `err` and the returned status is
/// `EXIT_EVALUATION_ERROR`; otherwise it is `0`.
pub fn run<W: Write, E: Write>(
    parser: &mut Parser,
    source: &str,
    name: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<u8> {
    let start = Instant::now();

    match parser.evaluate(source) {
        Ok(value) => {
            writeln!(out, "{}", format_number(value))?;
            tracing::debug!(elapsed = ?start.elapsed(), "evaluated {}", name);
            Ok(0)
        }
        Err(error) => {
            display_error(err, &error, source, name)?;
            Ok(EXIT_EVALUATION_ERROR)
        }
    }
}

/// One line per `evaluate` call; variables carry over between lines.
///
/// Errors are reported to `err` and the loop moves on to the next line.
pub fn repl<R: BufRead, W: Write, E: Write>(
    parser: &mut Parser,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim_end();
        if source.trim().is_empty() {
            continue;
        }

        match parser.evaluate(source) {
            Ok(value) => writeln!(out, "{}", format_number(value))?,
            Err(error) => display_error(err, &error, source, "<stdin>")?,
        }
    }
}
