use crate::fault::Fault;

/// Register file of an Intcode machine.
///
/// The instruction pointer addresses the next word to fetch; the relative
/// base is added to relative-mode operands before they are dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Registers {
    ip: i64,
    relative_base: i64,
}

impl Registers {
    /// Reads the instruction pointer.
    #[must_use]
    pub const fn ip(&self) -> i64 {
        self.ip
    }

    /// Writes the instruction pointer.
    pub const fn set_ip(&mut self, value: i64) {
        self.ip = value;
    }

    /// Returns the current instruction pointer and advances it by one word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::OutOfBounds`] when the pointer sits at `i64::MAX`; the
    /// pointer is left unchanged.
    pub const fn advance_ip(&mut self) -> Result<i64, Fault> {
        let current = self.ip;
        match current.checked_add(1) {
            Some(next) => {
                self.ip = next;
                Ok(current)
            }
            None => Err(Fault::OutOfBounds { target: i64::MIN }),
        }
    }

    /// Reads the relative base.
    #[must_use]
    pub const fn relative_base(&self) -> i64 {
        self.relative_base
    }

    /// Writes the relative base.
    pub const fn set_relative_base(&mut self, value: i64) {
        self.relative_base = value;
    }

    /// Adds `delta` to the relative base.
    pub const fn adjust_relative_base(&mut self, delta: i64) {
        self.relative_base = self.relative_base.wrapping_add(delta);
    }
}
