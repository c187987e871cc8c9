//! Machine construction, queue access, and operand-level memory access.

use std::collections::VecDeque;

use crate::api::MachineConfig;
use crate::decoder::ParameterMode;
use crate::execute::{resolve_operand, Operand};
use crate::fault::Fault;
use crate::memory::Memory;
use crate::state::{Registers, RunState};

/// A resumable Intcode machine.
///
/// Cloning produces a fully independent machine: memory, queues and
/// registers are owned values, so a clone can be driven down a different
/// execution path without affecting the original.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Machine {
    /// Instruction pointer and relative base.
    pub registers: Registers,
    /// Sparse program and data memory.
    pub memory: Memory,
    /// Pending input values in FIFO order.
    pub input: VecDeque<i64>,
    /// Produced output values in FIFO order.
    pub output: VecDeque<i64>,
    /// Current execution state.
    pub run_state: RunState,
    pub(crate) config: MachineConfig,
    pub(crate) steps_retired: u64,
}

impl Machine {
    /// Creates a machine with `program[i]` loaded at address `i`.
    #[must_use]
    pub fn new(program: &[i64]) -> Self {
        Self::with_config(program, &MachineConfig::default())
    }

    /// Creates a machine with an explicit configuration.
    #[must_use]
    pub fn with_config(program: &[i64], config: &MachineConfig) -> Self {
        Self {
            registers: Registers::default(),
            memory: Memory::from_program(program),
            input: VecDeque::new(),
            output: VecDeque::new(),
            run_state: RunState::Running,
            config: config.clone(),
            steps_retired: 0,
        }
    }

    /// Returns the configuration this machine was built with.
    #[must_use]
    pub const fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Returns `true` once the halt instruction has retired.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.run_state == RunState::Halted
    }

    /// Returns `true` while the machine is parked on an empty-input read.
    #[must_use]
    pub fn is_awaiting_input(&self) -> bool {
        self.run_state == RunState::AwaitingInput
    }

    /// Returns the fault latched on this machine, if any.
    #[must_use]
    pub const fn latched_fault(&self) -> Option<Fault> {
        self.run_state.latched_fault()
    }

    /// Address of the next instruction word to fetch.
    #[must_use]
    pub const fn instruction_pointer(&self) -> i64 {
        self.registers.ip()
    }

    /// Current relative base.
    #[must_use]
    pub const fn relative_base(&self) -> i64 {
        self.registers.relative_base()
    }

    /// Overrides the relative base.
    pub const fn set_relative_base(&mut self, value: i64) {
        self.registers.set_relative_base(value);
    }

    /// Total number of instructions retired by this machine.
    #[must_use]
    pub const fn steps_retired(&self) -> u64 {
        self.steps_retired
    }

    /// Appends one value to the input queue.
    pub fn push_input(&mut self, value: i64) {
        self.input.push_back(value);
    }

    /// Appends every value of `values` to the input queue, in order.
    pub fn extend_input(&mut self, values: impl IntoIterator<Item = i64>) {
        self.input.extend(values);
    }

    /// Pops the oldest produced output value.
    pub fn pop_output(&mut self) -> Option<i64> {
        self.output.pop_front()
    }

    /// Removes and returns every queued output value, oldest first.
    pub fn drain_output(&mut self) -> Vec<i64> {
        self.output.drain(..).collect()
    }

    /// Number of input values not yet consumed.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Number of output values not yet drained.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Reads an operand through `mode`.
    ///
    /// Immediate operands are returned unchanged; position and relative
    /// operands are dereferenced, with unwritten cells reading as zero.
    #[must_use]
    pub fn load(&self, operand: i64, mode: ParameterMode) -> i64 {
        match resolve_operand(operand, mode, self.registers.relative_base()) {
            Operand::Literal(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
        }
    }

    /// Writes `value` through an operand in `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ImmediateWrite`] when `mode` is
    /// [`ParameterMode::Immediate`]; memory is left untouched.
    pub fn store(&mut self, operand: i64, value: i64, mode: ParameterMode) -> Result<(), Fault> {
        match resolve_operand(operand, mode, self.registers.relative_base()) {
            Operand::Literal(_) => Err(Fault::ImmediateWrite),
            Operand::Address(addr) => {
                self.memory.write(addr, value);
                Ok(())
            }
        }
    }
}
