//! Control-signal table generation.
//!
//! The control board fetches a 3-byte control word per opcode from ROM
//! instead of decoding instructions in logic. The generator decodes each of
//! the 256 possible opcode bytes through [`Instruction::decode`], derives
//! the control signals the instruction needs, converts them to the board's
//! polarities and maps them onto ROM pins. It relies on decode being pure,
//! total and stable.

use crate::isa::{Instruction, Register};

/// Register output-enable lines: codes 0-11.
///
/// Zero and Number never drive the bus (an undriven bus reads 0), and the
/// Difference register rides the Sum lines with the ALU in subtract mode,
/// so only twelve enable lines exist.
pub const OUTPUT_LINES: usize = 12;

/// Register input-latch lines: codes 0-7 (Address through ProgramCounter).
pub const INPUT_LINES: usize = 8;

/// Control signals asserted while one instruction executes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ControlWord {
    /// Output enable per register code.
    pub out: [bool; OUTPUT_LINES],
    /// Input latch per register code.
    pub input: [bool; INPUT_LINES],
    /// ALU subtract mode: the Sum lines carry OperandX - OperandY.
    pub alu: bool,
    /// Inverts the condition gating the program-counter latch.
    pub jump: bool,
    /// Clears register storage.
    pub reset: bool,
    /// Latches the halt flip-flop.
    pub halt: bool,
    /// Drives the instruction's low nibble onto the bus.
    pub immediate: bool,
}

/// Derives the control word for one instruction.
pub fn translate(inst: Instruction) -> ControlWord {
    let mut word = ControlWord::default();
    match inst {
        Instruction::Move { dst, src } => {
            // moving a register onto itself asserts nothing
            if dst != src {
                word.input[dst.code() as usize] = true;
                drive(&mut word, src.code());
            }
        }
        Instruction::LoadImmediate { dst, .. } => {
            word.input[dst.code() as usize] = true;
            word.immediate = true;
        }
        Instruction::JumpIfZero { target } => {
            word.jump = true;
            word.input[Register::ProgramCounter.code() as usize] = true;
            drive(&mut word, target);
        }
        Instruction::JumpIfNotZero { target } => {
            word.input[Register::ProgramCounter.code() as usize] = true;
            drive(&mut word, target);
        }
        Instruction::JumpIfNotZeroImmediate { .. } => {
            word.immediate = true;
            word.input[Register::ProgramCounter.code() as usize] = true;
        }
        Instruction::Halt => word.halt = true,
        Instruction::Reset => word.reset = true,
    }
    word
}

/// Selects the register driving the bus.
fn drive(word: &mut ControlWord, code: u8) {
    let Some(register) = Register::from_code(code) else {
        return;
    };
    match register {
        Register::Number | Register::Zero => {}
        Register::Difference => {
            word.out[Register::Sum.code() as usize] = true;
            word.alu = true;
        }
        r => word.out[r.code() as usize] = true,
    }
}

/// Converts a control word to the polarities the board expects: output
/// enables, reset and the immediate select are active-low.
pub fn active_low(mut word: ControlWord) -> ControlWord {
    for line in &mut word.out {
        *line = !*line;
    }
    word.reset = !word.reset;
    word.immediate = !word.immediate;
    word
}

// Pin assignment on the three control ROMs. Number has no output driver,
// so its slot carries no pin and is skipped when mapping.
const OUT_PINS: [u8; OUTPUT_LINES] = [0, 1, 2, 3, 4, 5, 0, 6, 7, 8, 9, 10];
const IN_PINS: [u8; INPUT_LINES] = [11, 12, 13, 14, 15, 16, 17, 18];
const ALU_PIN: u8 = 19;
const JMP_PIN: u8 = 20;
const RST_PIN: u8 = 21;
const HLT_PIN: u8 = 22;
const INS_PIN: u8 = 23;

/// Maps a control word onto the 24 ROM pins, 8 per byte.
pub fn map(word: ControlWord) -> [u8; 3] {
    let mut pins = [0u8; 3];
    for (code, &active) in word.out.iter().enumerate() {
        if active && code != Register::Number.code() as usize {
            set_pin(&mut pins, OUT_PINS[code]);
        }
    }
    for (code, &active) in word.input.iter().enumerate() {
        if active {
            set_pin(&mut pins, IN_PINS[code]);
        }
    }
    if word.alu {
        set_pin(&mut pins, ALU_PIN);
    }
    if word.jump {
        set_pin(&mut pins, JMP_PIN);
    }
    if word.reset {
        set_pin(&mut pins, RST_PIN);
    }
    if word.halt {
        set_pin(&mut pins, HLT_PIN);
    }
    if word.immediate {
        set_pin(&mut pins, INS_PIN);
    }
    pins
}

fn set_pin(pins: &mut [u8; 3], pin: u8) {
    pins[(pin / 8) as usize] |= 1 << (pin % 8);
}

/// The 3-byte ROM entry for one opcode byte.
pub fn control_bytes(code: u8) -> [u8; 3] {
    map(active_low(translate(Instruction::decode(code))))
}

/// Emits the full control table: 256 consecutive 3-byte entries, indexed
/// by opcode byte.
pub fn generate() -> Vec<u8> {
    let mut table = Vec::with_capacity(256 * 3);
    for code in 0..=255u8 {
        table.extend_from_slice(&control_bytes(code));
    }
    table
}
