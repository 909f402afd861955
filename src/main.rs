use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser as _;
use exprlang::{
    cli::cli::{repl, run},
    init_tracing, Parser,
};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Evaluate arithmetic expressions over numeric variables")]
struct Args {
    /// Evaluate this text and exit
    #[arg(short, long)]
    eval: Option<String>,
    /// Evaluate the contents of a file as one statement list
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut parser = Parser::new();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let status = if let Some(source) = args.eval {
        run(&mut parser, &source, "<eval>", &mut stdout, &mut stderr)
    } else if let Some(file) = args.file {
        let source = match fs::read_to_string(&file) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("reading `{}` failed: {}", file.display(), e);
                return ExitCode::from(66);
            }
        };
        let name = file.to_string_lossy();
        run(&mut parser, &source, &name, &mut stdout, &mut stderr)
    } else {
        repl(&mut parser, io::stdin().lock(), &mut stdout, &mut stderr).map(|()| 0)
    };

    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("i/o failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
