//! Operand resolution shared by instruction execution and host access.

use crate::decoder::ParameterMode;

/// A parameter after mode resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Literal value; readable, never writable.
    Literal(i64),
    /// Absolute memory address.
    Address(i64),
}

/// Resolves a raw parameter into a literal or an absolute address.
///
/// Relative operands are offset by `relative_base` here, so every later
/// access is a plain position access.
#[must_use]
pub const fn resolve_operand(raw: i64, mode: ParameterMode, relative_base: i64) -> Operand {
    match mode {
        ParameterMode::Immediate => Operand::Literal(raw),
        ParameterMode::Position => Operand::Address(raw),
        ParameterMode::Relative => Operand::Address(raw.wrapping_add(relative_base)),
    }
}
