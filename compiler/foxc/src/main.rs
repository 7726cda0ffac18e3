//! Fox CLI

use std::path::Path;
use std::process::ExitCode;

use foxc::commands::{lex_file, parse_file, run_file};

fn main() -> ExitCode {
    foxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let result = match command.as_str() {
        "run" | "lex" | "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fox {command} <file.fox>");
                return ExitCode::FAILURE;
            };
            match command.as_str() {
                "run" => run_file(path).map(|_| ()),
                "lex" => lex_file(path),
                _ => parse_file(path),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("Fox {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            // If it looks like a file path, try to run it
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fox"))
            {
                run_file(command).map(|_| ())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Fox interpreter");
    println!();
    println!("Usage: fox <command> [file]");
    println!();
    println!("Commands:");
    println!("  <file.fox>           Run a Fox program");
    println!("  run <file.fox>       Run a Fox program");
    println!("  lex <file.fox>       Tokenize and display tokens");
    println!("  parse <file.fox>     Parse and display the AST");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=fox_eval=debug) to enable tracing.");
}
