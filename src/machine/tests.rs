use super::*;
use crate::assembler::assemble_source;

fn load(source: &str) -> Machine {
    let code = assemble_source(source).expect("assembly failed");
    Machine::load(&code)
}

fn run(source: &str, steps: usize) -> Machine {
    let mut machine = load(source);
    for _ in 0..steps {
        machine.step();
    }
    machine
}

/// Runs until halt, panicking if the program does not halt in `limit` steps.
fn run_to_halt(source: &str, limit: usize) -> Machine {
    let mut machine = load(source);
    for _ in 0..limit {
        machine.step();
        if machine.halted() {
            return machine;
        }
    }
    panic!("program did not halt within {limit} steps");
}

// ==================== Power-on ====================

#[test]
fn power_on_state() {
    let machine = Machine::load(&[]);
    assert_eq!(machine.pc(), 0);
    assert!(!machine.halted());
    assert_eq!(machine.buttons(), 0);
}

#[test]
fn load_pads_program_store() {
    let machine = Machine::load(&[0x6F]);
    assert_eq!(machine.current_instruction(), Instruction::Halt);
}

// ==================== Halt ====================

#[test]
fn halt_does_not_advance() {
    let machine = run("rst\nhlt", 2);
    assert!(machine.halted());
    assert_eq!(machine.pc(), 1);
}

#[test]
fn step_after_halt_is_a_noop() {
    let mut machine = run("hlt", 1);
    assert!(machine.halted());
    let registers = *machine.registers();
    machine.step();
    machine.step();
    assert_eq!(machine.pc(), 0);
    assert_eq!(*machine.registers(), registers);
}

// ==================== Reset ====================

#[test]
fn reset_zeroes_register_storage() {
    let machine = run("rst", 1);
    assert_eq!(*machine.registers(), [0; 7]);
    assert_eq!(machine.pc(), 1);
    assert!(!machine.halted());
}

#[test]
fn reset_is_idempotent() {
    let mut machine = run("rst\nrst", 1);
    let registers = *machine.registers();
    let memory = *machine.memory();
    machine.step();
    assert_eq!(*machine.registers(), registers);
    assert_eq!(*machine.memory(), memory);
    assert!(!machine.halted());
    assert_eq!(machine.pc(), 2);
}

#[test]
fn reset_preserves_memory() {
    // mem[9] = 4, then reset
    let machine = run_to_halt("ldi a 9\nldi g 4\nmov m g\nrst\nhlt", 16);
    assert_eq!(machine.memory()[9], 4);
    assert_eq!(*machine.registers(), [0; 7]);
}

// ==================== Moves ====================

#[test]
fn move_copies_between_registers() {
    let machine = run_to_halt("ldi x 11\nmov g x\nhlt", 16);
    assert_eq!(machine.read(Register::General), 11);
}

#[test]
fn move_reads_memory_through_address() {
    let machine = run_to_halt("ldi a 9\nldi g 4\nmov m g\nrst\nldi a 9\nmov x m\nhlt", 16);
    assert_eq!(machine.read(Register::OperandX), 4);
}

#[test]
fn move_writes_memory_through_address() {
    let machine = run_to_halt("ldi a 3\nldi g 12\nmov m g\nhlt", 16);
    assert_eq!(machine.memory()[3], 12);
}

#[test]
fn load_immediate_routes_memory_like_move() {
    let machine = run_to_halt("ldi a 2\nldi m 7\nhlt", 16);
    assert_eq!(machine.memory()[2], 7);
    // the Memory slot itself holds no storage of its own
    let machine = run_to_halt("rst\nldi a 2\nldi m 7\nmov x m\nhlt", 16);
    assert_eq!(machine.read(Register::OperandX), 7);
}

#[test]
fn number_reads_zero() {
    let machine = run_to_halt("ldi n 5\nmov g n\nhlt", 16);
    assert_eq!(machine.read(Register::General), 0);
}

#[test]
fn zero_reads_zero() {
    let machine = run_to_halt("mov c z\nhlt", 16);
    assert_eq!(machine.read(Register::Conditional), 0);
}

#[test]
fn program_counter_reads_fetch_address() {
    let machine = run_to_halt("mov a p\nmov g p\nhlt", 16);
    assert_eq!(machine.read(Register::Address), 0);
    assert_eq!(machine.read(Register::General), 1);
}

#[test]
fn buttons_reads_external_input() {
    let mut machine = load("mov g b\nhlt");
    machine.set_buttons(0xAB);
    machine.step();
    assert_eq!(machine.read(Register::General), 0xAB);
}

// ==================== Computed registers ====================

#[test]
fn jump_register_tracks_conditional() {
    let machine = run_to_halt("ldi c 1\nmov g j\nhlt", 16);
    assert_eq!(machine.read(Register::General), 1);
    let machine = run_to_halt("ldi c 0\nmov g j\nhlt", 16);
    assert_eq!(machine.read(Register::General), 0);
}

#[test]
fn left_shift_moves_low_nibble_high() {
    let machine = run_to_halt("ldi a 15\nmov g l\nhlt", 16);
    assert_eq!(machine.read(Register::General), 0xF0);
}

#[test]
fn sum_wraps_at_eight_bits() {
    // x = y = 0xF0 via the shifter, so the sum wraps to 0xE0
    let machine = run_to_halt("ldi a 15\nmov x l\nmov y l\nmov g s\nhlt", 16);
    assert_eq!(machine.read(Register::General), 0xE0);
}

#[test]
fn difference_wraps_at_eight_bits() {
    let machine = run_to_halt("ldi x 1\nldi y 2\nmov g d\nhlt", 16);
    assert_eq!(machine.read(Register::General), 0xFF);
}

// ==================== Jumps ====================

#[test]
fn jump_if_zero_taken() {
    // after reset the conditional is zero; the target register a is zero
    // too, so execution loops back to the start
    let machine = run("rst\njez a", 2);
    assert_eq!(machine.pc(), 0);
    assert!(!machine.halted());
}

#[test]
fn jump_if_zero_not_taken() {
    let machine = run("ldi c 1\njez a", 2);
    assert_eq!(machine.pc(), 2);
}

#[test]
fn jump_if_not_zero_taken() {
    let machine = run("ldi a 5\nldi c 1\njnz a", 3);
    assert_eq!(machine.pc(), 5);
}

#[test]
fn jump_if_not_zero_not_taken() {
    let machine = run("rst\njnz a", 2);
    assert_eq!(machine.pc(), 2);
}

#[test]
fn jump_immediate_taken() {
    let machine = run("ldi c 1\njni 7", 2);
    assert_eq!(machine.pc(), 7);
}

#[test]
fn jump_immediate_not_taken() {
    let machine = run("rst\njni 7", 2);
    assert_eq!(machine.pc(), 2);
}

#[test]
fn jump_target_value_is_read_at_jump_time() {
    // jump to the value held in g
    let machine = run("ldi g 9\nldi c 1\njnz g", 3);
    assert_eq!(machine.pc(), 9);
}

// ==================== Program counter ====================

#[test]
fn program_counter_wraps_around() {
    // build 0xFF in a via the shifter and adder, jump there, then execute
    // the zero-filled cell at 255 and wrap to 0
    let source = "ldi a 15\nmov x l\nldi y 15\nmov a s\nldi c 1\njnz a";
    let mut machine = run(source, 6);
    assert_eq!(machine.pc(), 255);
    machine.step();
    assert_eq!(machine.pc(), 0);
}

// ==================== Whole programs ====================

#[test]
fn countdown_loop_halts() {
    // count x down from 3 through the ALU, falling through to halt at zero
    let source = "\
ldi x 3
ldi y 1
mov x d
mov c x
jni 2
hlt";
    let machine = run_to_halt(source, 64);
    assert_eq!(machine.read(Register::OperandX), 0);
}

#[test]
fn decoded_garbage_still_runs() {
    // arbitrary bytes execute without any error outcome
    let mut machine = Machine::load(&[0x42, 0x91, 0xDE, 0x33, 0x0F]);
    for _ in 0..32 {
        machine.step();
    }
}
