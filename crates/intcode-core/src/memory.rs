//! Sparse address-keyed memory with an implicit zero default.

use std::collections::HashMap;

/// Sparse machine memory.
///
/// Addresses are unbounded signed integers; any address that was never
/// written reads as `0`. Program words and data share one store, so
/// self-modifying programs see their own writes on the next fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Memory {
    cells: HashMap<i64, i64>,
}

impl Memory {
    /// Creates an empty memory where every address reads as zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `program[i]` into address `i` for every index of the program.
    #[must_use]
    pub fn from_program(program: &[i64]) -> Self {
        Self {
            cells: (0_i64..).zip(program.iter().copied()).collect(),
        }
    }

    /// Reads the value stored at `addr`, or `0` if it was never written.
    #[must_use]
    pub fn read(&self, addr: i64) -> i64 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    /// Stores `value` at `addr`, inserting or overwriting the cell.
    pub fn write(&mut self, addr: i64, value: i64) {
        self.cells.insert(addr, value);
    }

    /// Number of cells that hold an explicit entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when no cell holds an explicit entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Copies `len` consecutive cells starting at `start`, zero-filling gaps.
    #[must_use]
    pub fn to_vec(&self, start: i64, len: usize) -> Vec<i64> {
        (start..).take(len).map(|addr| self.read(addr)).collect()
    }
}

impl FromIterator<(i64, i64)> for Memory {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
