//! Resumable Intcode virtual machine.

/// Sparse address-keyed memory.
pub mod memory;
pub use memory::Memory;

/// Opcode table and classification.
pub mod encoding;
pub use encoding::{classify_opcode, Opcode, OPCODE_TABLE};

/// Instruction word decoding into opcode and parameter modes.
pub mod decoder;
pub use decoder::{Decoder, Instruction, ParameterMode, MODE_DIGITS};

/// Fault taxonomy raised during execution.
pub mod fault;
pub use fault::{Fault, FaultClass};

/// Register file and run-state primitives.
pub mod state;
pub use state::{Registers, RunState};

/// Public host-facing configuration, outcome and trace types.
pub mod api;
pub use api::{
    InputPolicy, MachineConfig, NoopTrace, RunBoundary, RunOutcome, StepOutcome, StopReason,
    TraceEvent, TraceLog, TraceSink,
};

/// Machine construction, queues and operand access.
pub mod machine;
pub use machine::Machine;

/// Single-instruction execution pipeline.
pub mod execute;
pub use execute::{resolve_operand, Operand};

/// Composite run loops and suspension points.
pub mod run;

/// Text disassembly of machine memory.
pub mod disasm;
pub use disasm::{disassemble_one, disassemble_range, DisassemblyRow};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
