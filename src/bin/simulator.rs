//! Interactive processor simulator CLI.
//!
//! Loads a machine-code program into an emulated processor and steps it
//! under interactive control. Stepping prints the relational explanation of
//! the instruction about to execute.
//!
//! # Usage
//! ```text
//! simulator <program.bin>
//! ```

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use zasm::disassembler::explain;
use zasm::isa::REGISTERS;
use zasm::machine::Machine;
use zasm::{error, info};

/// Step cap for the `c` command, so runaway programs stay interruptible.
const STEP_LIMIT: usize = 1024;

const COMMANDS: &str = "\
commands:
\tb - set the buttons value
\tc - continue for at most 1024 instructions
\th - help text
\tm - print memory
\tp - print state
\tq - quit
\tr - power cycle
\ts - step
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 || args[1] == "--help" || args[1] == "-h" {
        info!("usage: {} <program.bin>", args[0]);
        process::exit(if args.len() != 2 { 1 } else { 0 });
    }

    let code = match fs::read(&args[1]) {
        Ok(code) => code,
        Err(e) => {
            error!("failed to read program: {}", e);
            process::exit(1);
        }
    };

    info!("program loaded with {} instructions", code.len());
    let mut machine = Machine::load(&code);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(">");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        match line.trim() {
            "b" => {
                print!("value>");
                let _ = io::stdout().flush();
                let Some(Ok(value)) = lines.next() else {
                    break;
                };
                match parse_binary_byte(&value) {
                    Some(v) => machine.set_buttons(v),
                    None => error!("invalid 8-bit binary number"),
                }
            }
            "c" => run(&mut machine),
            "h" => print!("{COMMANDS}"),
            "m" => print_memory(&machine),
            "p" => print_state(&machine),
            "q" => {
                println!("exit");
                return;
            }
            "r" => {
                machine = Machine::load(&code);
                println!("power cycled");
            }
            "s" => {
                println!("{}", explain(machine.current_instruction()));
                machine.step();
            }
            _ => error!("unrecognized command - 'h' for help"),
        }
    }
}

fn run(machine: &mut Machine) {
    for _ in 0..STEP_LIMIT {
        machine.step();
        if machine.halted() {
            println!("halt");
            return;
        }
    }
    println!("reached {STEP_LIMIT} instructions");
}

fn print_register(name: char, value: u8) {
    println!(
        "{name}: u[{value:3}] i[{:4}] h[{value:02x}] b[{value:08b}]",
        value as i8
    );
}

fn print_state(machine: &Machine) {
    if machine.halted() {
        println!("halted");
    } else {
        println!("running");
    }
    print_register('p', machine.pc());
    print_register('b', machine.buttons());
    for (code, &value) in machine.registers().iter().enumerate() {
        print_register(REGISTERS[code].letter(), value);
    }
}

fn print_memory(machine: &Machine) {
    for (row, bytes) in machine.memory().chunks(16).enumerate() {
        print!("{:02x}:", row * 16);
        for byte in bytes {
            print!(" {byte:02x}");
        }
        println!();
    }
}

fn parse_binary_byte(text: &str) -> Option<u8> {
    let text = text.trim();
    if text.len() != 8 {
        return None;
    }
    u8::from_str_radix(text, 2).ok()
}
