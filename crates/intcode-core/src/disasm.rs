//! Instruction disassembly for Intcode memory.
//!
//! Rows are produced by walking memory linearly, so data interleaved with
//! code is rendered as whatever it decodes to.

use std::fmt::Write as _;

use crate::decoder::{Decoder, ParameterMode};
use crate::memory::Memory;

/// A single disassembled instruction row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisassemblyRow {
    /// Address of the instruction word.
    pub addr: i64,
    /// Raw words: the instruction word followed by its parameters.
    pub words: Vec<i64>,
    /// Instruction mnemonic (e.g. `ADD`, `HALT`), or `.word` when illegal.
    pub mnemonic: String,
    /// Formatted operands (e.g. `#5, [rb-1], [12]`).
    pub operands: String,
    /// Whether the word failed to decode.
    pub is_illegal: bool,
}

impl DisassemblyRow {
    /// Number of words this row covers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Rows always cover at least the instruction word.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Disassembles the instruction starting at `addr`.
#[must_use]
pub fn disassemble_one(memory: &Memory, addr: i64) -> DisassemblyRow {
    let word = memory.read(addr);

    let Ok(instr) = Decoder::decode(word) else {
        return DisassemblyRow {
            addr,
            words: vec![word],
            mnemonic: ".word".to_string(),
            operands: format!("{word} ; ILLEGAL"),
            is_illegal: true,
        };
    };

    let params = instr.opcode.parameter_count();
    let words = memory.to_vec(addr, params + 1);
    let mut operands = String::new();
    for (mode, raw) in instr.modes.iter().zip(words.iter().skip(1)) {
        if !operands.is_empty() {
            operands.push_str(", ");
        }
        format_operand(&mut operands, *mode, *raw);
    }

    DisassemblyRow {
        addr,
        words,
        mnemonic: instr.opcode.mnemonic().to_string(),
        operands,
        is_illegal: false,
    }
}

/// Disassembles up to `count` consecutive instructions starting at `start`.
#[must_use]
pub fn disassemble_range(memory: &Memory, start: i64, count: usize) -> Vec<DisassemblyRow> {
    let mut rows = Vec::with_capacity(count);
    let mut addr = start;

    for _ in 0..count {
        let row = disassemble_one(memory, addr);
        addr = addr.saturating_add(i64::try_from(row.len()).unwrap_or(1));
        rows.push(row);
    }

    rows
}

fn format_operand(out: &mut String, mode: ParameterMode, raw: i64) {
    let _ = match mode {
        ParameterMode::Immediate => write!(out, "#{raw}"),
        ParameterMode::Position => write!(out, "[{raw}]"),
        ParameterMode::Relative if raw < 0 => write!(out, "[rb-{}]", raw.unsigned_abs()),
        ParameterMode::Relative => write!(out, "[rb+{raw}]"),
    };
}
