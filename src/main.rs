mod logger;

use std::{fs, io, process::ExitCode};

use clap::{Parser, ValueEnum};
use fredlang::{
    error::InterpretError,
    execute,
    interpreter::{lexer::scan, parser::core::Parser as ExprParser},
    repl,
};
use log::{error, info};

/// fredlang evaluates expressions over numbers, strings and booleans.
///
/// Without CONTENTS an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fredlang to read CONTENTS as a file path instead of source code.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// What to print for the given source.
    #[arg(short, long, value_enum, default_value_t = Emit::Value)]
    emit: Emit,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// Evaluate and print the resulting value.
    Value,
    /// Print the scanned tokens, one per line.
    Tokens,
    /// Print the fully parenthesized syntax tree.
    Ast,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init(logger::level_for(args.verbose)) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let Some(contents) = args.contents else {
        return match repl::run(io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("REPL stopped: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let source = if args.file {
        info!("reading source from '{contents}'");
        match fs::read_to_string(&contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist? ({e})");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let succeeded = match args.emit {
        Emit::Value => emit_value(&source),
        Emit::Tokens => emit_tokens(&source),
        Emit::Ast => emit_ast(&source),
    };

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn emit_value(source: &str) -> bool {
    match execute(source) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            report(&e);
            false
        },
    }
}

fn emit_tokens(source: &str) -> bool {
    let (tokens, errors) = scan(source);
    for token in &tokens {
        println!("{token}");
    }
    for e in &errors {
        eprintln!("{e}");
    }
    errors.is_empty()
}

fn emit_ast(source: &str) -> bool {
    let (tokens, scan_errors) = scan(source);
    if !scan_errors.is_empty() {
        report(&InterpretError::Scan(scan_errors));
        return false;
    }

    match ExprParser::new(&tokens).parse_all() {
        Ok(expr) => {
            println!("{expr}");
            true
        },
        Err(errors) => {
            report(&InterpretError::Parse(errors));
            false
        },
    }
}

fn report(error: &InterpretError) {
    eprintln!("{error}");
}
