//! CLI tool to tokenize KPL source files.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: kplscan [--lenient] <files...>");
        eprintln!();
        eprintln!("Prints one token per line as <line>-<column>:<KIND>.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --lenient  Keep scanning past lexical errors");
        return ExitCode::from(2);
    }

    let lenient = args[1] == "--lenient";
    let files = if lenient { &args[2..] } else { &args[1..] };

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        if lenient {
            let (tokens, errors) = kpl_lexer::tokenize_lenient(&content);
            for token in tokens {
                println!("{token}");
            }
            for err in &errors {
                eprintln!("{path}: {err}");
            }
            had_error |= !errors.is_empty();
        } else {
            match kpl_lexer::tokenize(&content) {
                Ok(tokens) => {
                    for token in tokens {
                        println!("{token}");
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
