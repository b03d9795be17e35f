//! Machine-code disassembler CLI.
//!
//! Reads raw machine code and prints one line of canonical assembly per
//! byte, to stdout or to a file.
//!
//! # Usage
//! ```text
//! disassembler <input.bin> [OPTIONS]
//! ```
//!
//! # Options
//! - `-o, --output <file>`: Write the listing to a file instead of stdout

use std::env;
use std::fs;
use std::process;
use zasm::disassembler::disassemble;
use zasm::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            k @ ("--output" | "-o") => {
                i += 1;
                if i >= args.len() {
                    error!("{k} requires an argument");
                    process::exit(1);
                }
                output_path = Some(args[i].clone());
                i += 1;
            }
            other => {
                error!("unexpected argument: {}", other);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let code = match fs::read(input_path) {
        Ok(code) => code,
        Err(e) => {
            error!("failed to read input file: {}", e);
            process::exit(1);
        }
    };

    let listing = disassemble(&code);

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &listing) {
                error!("failed to write output file: {}", e);
                process::exit(1);
            }
            info!("disassembled {} instructions to {}", code.len(), path);
        }
        None => print!("{listing}"),
    }
}

const USAGE: &str = "\
zasm disassembler

USAGE:
    {program} <input.bin> [OPTIONS]

ARGS:
    <input.bin>    Machine code file to disassemble

OPTIONS:
    -o, --output <file>     Write the listing to a file instead of stdout
    -h, --help              Print this help message
";

fn print_usage(program: &str) {
    info!("{}", USAGE.replace("{program}", program));
}
