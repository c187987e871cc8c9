//! Instruction decoder for Intcode words.
//!
//! A word is read as decimal digits, least significant first: the low two
//! digits form the opcode and the next three select the parameter modes of
//! the first, second and third parameter. Digits above the fifth are ignored.

use crate::encoding::{classify_opcode, Opcode};
use crate::fault::Fault;

/// Number of mode digits carried by every instruction word.
pub const MODE_DIGITS: usize = 3;

/// How an instruction parameter's raw value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterMode {
    /// The parameter is an address to dereference.
    #[default]
    Position,
    /// The parameter is the value itself. Never valid as a write target.
    Immediate,
    /// The parameter is an offset from the relative base, then dereferenced.
    Relative,
}

impl ParameterMode {
    /// Converts a single decimal mode digit into a parameter mode.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Position),
            1 => Some(Self::Immediate),
            2 => Some(Self::Relative),
            _ => None,
        }
    }

    /// Returns the mode digit used to encode this mode.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Position => 0,
            Self::Immediate => 1,
            Self::Relative => 2,
        }
    }
}

/// Decoded instruction word: opcode plus the modes of its three parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation selected by the low two digits.
    pub opcode: Opcode,
    /// Modes of parameters 1, 2 and 3, in that order.
    pub modes: [ParameterMode; MODE_DIGITS],
}

impl Instruction {
    /// Returns the mode of the 1-based parameter `param`.
    ///
    /// Parameters past the third read as [`ParameterMode::Position`], matching
    /// the implicit zero digits of a short word.
    #[must_use]
    pub fn mode(&self, param: u8) -> ParameterMode {
        usize::from(param)
            .checked_sub(1)
            .and_then(|index| self.modes.get(index).copied())
            .unwrap_or_default()
    }

    /// Re-encodes this instruction into its canonical word.
    #[must_use]
    pub fn encode(self) -> i64 {
        self.modes
            .iter()
            .rev()
            .fold(0_i64, |acc, mode| acc * 10 + i64::from(mode.digit()))
            * 100
            + self.opcode.code()
    }
}

/// Stateless decoder for Intcode instruction words.
pub struct Decoder;

impl Decoder {
    /// Splits an instruction word into its opcode and parameter modes.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::IllegalOpcode`] when the word is negative or its low
    /// two digits are not an assigned opcode, and [`Fault::IllegalMode`] when
    /// any of the three mode digits is outside `0..=2`.
    pub fn decode(word: i64) -> Result<Instruction, Fault> {
        if word < 0 {
            return Err(Fault::IllegalOpcode {
                word,
                opcode: word % 100,
            });
        }

        let code = word % 100;
        let opcode = classify_opcode(code).ok_or(Fault::IllegalOpcode { word, opcode: code })?;

        let mut modes = [ParameterMode::Position; MODE_DIGITS];
        let mut rest = word / 100;
        for mode in &mut modes {
            let digit = mode_digit(rest);
            *mode = ParameterMode::from_digit(digit).ok_or(Fault::IllegalMode { word, digit })?;
            rest /= 10;
        }

        Ok(Instruction { opcode, modes })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn mode_digit(rest: i64) -> u8 {
    (rest % 10) as u8
}
