/// The ten assigned Intcode operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    ReadInput = 3,
    WriteOutput = 4,
    JumpIfTrue = 5,
    JumpIfFalse = 6,
    LessThan = 7,
    Equals = 8,
    AdjustRelativeBase = 9,
    Halt = 99,
}

/// Opcode assignment table: `(code, opcode)`.
///
/// Any code not present here is illegal by definition.
pub const OPCODE_TABLE: &[(i64, Opcode)] = &[
    (1, Opcode::Add),
    (2, Opcode::Multiply),
    (3, Opcode::ReadInput),
    (4, Opcode::WriteOutput),
    (5, Opcode::JumpIfTrue),
    (6, Opcode::JumpIfFalse),
    (7, Opcode::LessThan),
    (8, Opcode::Equals),
    (9, Opcode::AdjustRelativeBase),
    (99, Opcode::Halt),
];

/// Returns the assigned opcode for a two-digit opcode value.
///
/// `None` means the code is illegal.
#[must_use]
pub fn classify_opcode(code: i64) -> Option<Opcode> {
    OPCODE_TABLE
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, opcode)| *opcode)
}

impl Opcode {
    /// Numeric opcode value as it appears in the low two digits of a word.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn code(self) -> i64 {
        self as u8 as i64
    }

    /// Number of parameters that follow the instruction word.
    #[must_use]
    pub const fn parameter_count(self) -> usize {
        match self {
            Self::Add | Self::Multiply | Self::LessThan | Self::Equals => 3,
            Self::JumpIfTrue | Self::JumpIfFalse => 2,
            Self::ReadInput | Self::WriteOutput | Self::AdjustRelativeBase => 1,
            Self::Halt => 0,
        }
    }

    /// Short uppercase mnemonic used by the disassembler.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Multiply => "MUL",
            Self::ReadInput => "IN",
            Self::WriteOutput => "OUT",
            Self::JumpIfTrue => "JNZ",
            Self::JumpIfFalse => "JZ",
            Self::LessThan => "LT",
            Self::Equals => "EQ",
            Self::AdjustRelativeBase => "ARB",
            Self::Halt => "HALT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_opcode, Opcode, OPCODE_TABLE};

    #[test]
    fn table_codes_match_discriminants() {
        for (code, opcode) in OPCODE_TABLE {
            assert_eq!(opcode.code(), *code);
            assert_eq!(classify_opcode(*code), Some(*opcode));
        }
    }

    #[test]
    fn code_is_usable_in_const_context() {
        const HALT: i64 = Opcode::Halt.code();
        const ADD: i64 = Opcode::Add.code();
        assert_eq!((HALT, ADD), (99, 1));
    }

    #[test]
    fn unassigned_codes_are_illegal() {
        let assigned: Vec<i64> = OPCODE_TABLE.iter().map(|(code, _)| *code).collect();
        for code in 0..100 {
            assert_eq!(classify_opcode(code).is_some(), assigned.contains(&code));
        }
        assert_eq!(classify_opcode(-1), None);
        assert_eq!(classify_opcode(199), None);
    }

    #[test]
    fn arity_and_mnemonics() {
        let listing: Vec<(usize, &str)> = OPCODE_TABLE
            .iter()
            .map(|(_, opcode)| (opcode.parameter_count(), opcode.mnemonic()))
            .collect();
        assert_eq!(
            listing,
            vec![
                (3, "ADD"),
                (3, "MUL"),
                (1, "IN"),
                (1, "OUT"),
                (2, "JNZ"),
                (2, "JZ"),
                (3, "LT"),
                (3, "EQ"),
                (1, "ARB"),
                (0, "HALT"),
            ]
        );
    }
}
