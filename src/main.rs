use std::fs;

use clap::Parser;
use keel::{eval_expression, run_script};

/// keel is a small embeddable scripting language with static types, C-like
/// expressions, and loop statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells keel to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Evaluates the input as a single expression and prints its value.
    #[arg(short, long)]
    expression: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.expression {
        match eval_expression(&source) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        match run_script(&source) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}
