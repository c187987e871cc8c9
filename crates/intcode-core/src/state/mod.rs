//! Architectural machine state primitives.

/// Instruction pointer and relative-base registers.
pub mod registers;
/// Host-observable execution state machine.
pub mod run_state;

pub use registers::Registers;
pub use run_state::RunState;
