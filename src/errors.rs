//! Assembly and tooling error types.

use zasm_derive::Error;

/// Errors that can occur while assembling source text.
///
/// The first error terminates the current compile; nothing is recovered or
/// resynced. Decoding machine code and stepping the processor never fail.
#[derive(Debug, Error)]
pub enum ZasmError {
    /// Mnemonic did not match any of the seven operations.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    /// Register token did not name one of the fourteen registers.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),
    /// Character after a leading `0` was neither `x`, `b`, nor end of token.
    #[error("invalid immediate base in `{0}`")]
    ImmediateBase(String),
    /// Character was not a digit of the selected base.
    #[error("invalid immediate digit in `{0}`")]
    ImmediateDigit(String),
    /// Too many (or too few) digits for the selected base.
    #[error("bad immediate length in `{0}`")]
    ImmediateLength(String),
    /// Decimal immediate does not fit in four bits.
    #[error("immediate overflow in `{0}`")]
    ImmediateOverflow(String),
    /// Source byte outside the ASCII range.
    #[error("invalid input character `{0}`")]
    InvalidCharacter(u8),
    /// Token longer than six characters.
    #[error("token too long")]
    TokenLength,
    /// More than three tokens on one line.
    #[error("line too long")]
    LineLength,
    /// Wrong number of arguments for the operation.
    #[error("bad instruction format")]
    InstructionFormat,
    /// Move or load-immediate destination has no input latch.
    #[error("writing to read-only register `{0}`")]
    ReadOnlyRegister(char),
    /// Instruction fails the validity predicate and has no encoding.
    #[error("invalid instruction")]
    InvalidInstruction,
    /// Underlying stream failure, wrapped without reinterpretation.
    #[error("io error: {0}")]
    Io(String),
    /// Any of the above, tagged with its 1-based source line number.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        source: Box<ZasmError>,
    },
}

impl ZasmError {
    /// Tags an error with the 1-based source line it occurred on.
    pub(crate) fn at_line(self, line: usize) -> ZasmError {
        ZasmError::Line {
            line,
            source: Box::new(self),
        }
    }
}
