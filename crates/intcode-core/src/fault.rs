use thiserror::Error;

/// Fault classes used to group faults by the failing pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FaultClass {
    /// Decoder rejected an instruction word.
    Decode,
    /// An instruction tried to write through a literal operand.
    Operand,
    /// The instruction pointer left the addressable range.
    OutOfBounds,
    /// An input read found nothing to consume.
    Starvation,
}

/// Unrecoverable execution faults.
///
/// A fault latches on the machine that raised it; the machine refuses to make
/// further progress and reports the same fault on every later step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Fault {
    /// The two low-order digits of the word name no known opcode.
    #[error("illegal opcode {opcode} in instruction word {word}")]
    IllegalOpcode {
        /// Raw instruction word as fetched from memory.
        word: i64,
        /// Opcode extracted from the word.
        opcode: i64,
    },
    /// A parameter-mode digit is outside `0..=2`.
    #[error("illegal parameter mode {digit} in instruction word {word}")]
    IllegalMode {
        /// Raw instruction word as fetched from memory.
        word: i64,
        /// Offending mode digit.
        digit: u8,
    },
    /// A write target was encoded in immediate mode.
    #[error("write through an immediate-mode parameter")]
    ImmediateWrite,
    /// A jump targeted a negative address, or the instruction pointer ran
    /// past `i64::MAX`.
    #[error("instruction pointer moved to negative address {target}")]
    OutOfBounds {
        /// Rejected target; `i64::MIN` when the pointer overflowed.
        target: i64,
    },
    /// `read_input` executed against an empty input queue.
    #[error("input read attempted with an empty input queue")]
    InputStarved,
}

impl Fault {
    /// Returns the class this fault is reported under.
    #[must_use]
    pub const fn class(self) -> FaultClass {
        match self {
            Self::IllegalOpcode { .. } | Self::IllegalMode { .. } => FaultClass::Decode,
            Self::ImmediateWrite => FaultClass::Operand,
            Self::OutOfBounds { .. } => FaultClass::OutOfBounds,
            Self::InputStarved => FaultClass::Starvation,
        }
    }
}
