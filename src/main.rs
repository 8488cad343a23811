use std::{fs, process};

use clap::Parser;
use step::run;

/// step is an easy to use, dynamically typed scripting language with
/// Python-like semantics for numbers, strings, lists and functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the Step program to execute.
    file: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        process::exit(1);
    });

    let stdout = std::io::stdout();
    if let Err(e) = run(&script, &mut stdout.lock()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
