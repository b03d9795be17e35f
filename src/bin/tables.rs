//! ROM table generator CLI.
//!
//! Emits the lookup tables the board's support ROMs are burned from, and
//! packs finished images for their sockets.
//!
//! # Usage
//! ```text
//! tables microcode <out.bin>
//! tables number <0|1> <out.bin>
//! tables pack <i|n|m> <in.bin> <out.bin>
//! ```

use std::env;
use std::fs;
use std::process;
use zasm::numtable::Page;
use zasm::pack::{pack, Target, ROM_SIZE};
use zasm::{error, info, microcode, numtable};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    match args[1].as_str() {
        "microcode" => {
            let [_, _, out] = &args[..] else {
                bad_arguments(&args[0]);
            };
            write_table(out, &microcode::generate());
        }
        "number" => {
            let [_, _, page, out] = &args[..] else {
                bad_arguments(&args[0]);
            };
            let page = match page.as_str() {
                "0" => Page::Low,
                "1" => Page::High,
                _ => {
                    error!("page must be 0 or 1");
                    process::exit(1);
                }
            };
            write_table(out, &numtable::generate(page));
        }
        "pack" => {
            let [_, _, mode, input, out] = &args[..] else {
                bad_arguments(&args[0]);
            };
            let target = match mode.as_str() {
                "i" => Target::Instruction,
                "n" => Target::Number,
                "m" => Target::Microcode,
                _ => {
                    error!("mode must be 'i', 'n', or 'm'");
                    process::exit(1);
                }
            };
            let bytes = match fs::read(input) {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!("failed to read input file: {}", e);
                    process::exit(1);
                }
            };
            // short images are zero-padded to a full ROM
            let mut image = [0u8; ROM_SIZE];
            let len = bytes.len().min(ROM_SIZE);
            image[..len].copy_from_slice(&bytes[..len]);
            pack(&mut image, target);
            write_table(out, &image);
        }
        other => {
            error!("unknown table `{}`", other);
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn write_table(path: &str, table: &[u8]) {
    if let Err(e) = fs::write(path, table) {
        error!("failed to write output file: {}", e);
        process::exit(1);
    }
    info!("wrote {} ({} bytes)", path, table.len());
}

fn bad_arguments(program: &str) -> ! {
    error!("bad arguments");
    print_usage(program);
    process::exit(1);
}

const USAGE: &str = "\
zasm table generator

USAGE:
    {program} microcode <out.bin>
    {program} number <0|1> <out.bin>
    {program} pack <i|n|m> <in.bin> <out.bin>

TABLES:
    microcode    256 x 3-byte control words, indexed by opcode
    number       7-segment table for the low (0) or high (1) nibble
    pack         permute a 256-byte image for its ROM socket
";

fn print_usage(program: &str) {
    info!("{}", USAGE.replace("{program}", program));
}
