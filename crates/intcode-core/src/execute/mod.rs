//! Fetch, decode and dispatch of single Intcode instructions.
//!
//! One step fetches the word at the instruction pointer and advances the
//! pointer past it, then fetches each parameter in turn, advancing once per
//! parameter before resolving it through its mode. A fault stops the
//! instruction where it is: sub-steps already completed stay applied and the
//! fault latches on the machine.

mod helpers;

pub use helpers::{resolve_operand, Operand};

use crate::api::{InputPolicy, NoopTrace, StepOutcome, TraceEvent, TraceSink};
use crate::decoder::{Decoder, Instruction};
use crate::encoding::Opcode;
use crate::fault::Fault;
use crate::machine::Machine;
use crate::state::RunState;

#[derive(Clone, Copy)]
enum CompareOp {
    LessThan,
    Equals,
}

impl Machine {
    /// Executes exactly one instruction.
    ///
    /// Stepping a halted machine is a no-op reporting [`StepOutcome::Halted`].
    ///
    /// # Errors
    ///
    /// Returns the fault raised by this instruction, or the fault already
    /// latched by an earlier step.
    pub fn step(&mut self) -> Result<StepOutcome, Fault> {
        self.step_traced(&mut NoopTrace)
    }

    /// Executes exactly one instruction, reporting trace events to `sink`
    /// when tracing is enabled in the machine configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Machine::step`].
    pub fn step_traced(&mut self, sink: &mut dyn TraceSink) -> Result<StepOutcome, Fault> {
        match self.run_state {
            RunState::FaultLatched(fault) => return Err(fault),
            RunState::Halted => return Ok(StepOutcome::Halted),
            RunState::Running | RunState::AwaitingInput => {}
        }

        let start = self.registers.ip();
        match self.execute_instruction(sink) {
            Ok(outcome) => {
                self.run_state = match outcome {
                    StepOutcome::Retired => RunState::Running,
                    StepOutcome::Halted => RunState::Halted,
                    StepOutcome::AwaitingInput => RunState::AwaitingInput,
                };
                if outcome != StepOutcome::AwaitingInput {
                    self.steps_retired += 1;
                }
                Ok(outcome)
            }
            Err(fault) => {
                self.run_state = RunState::FaultLatched(fault);
                self.emit(sink, TraceEvent::FaultRaised { fault, ip: start });
                Err(fault)
            }
        }
    }

    fn execute_instruction(&mut self, sink: &mut dyn TraceSink) -> Result<StepOutcome, Fault> {
        let start = self.registers.advance_ip()?;
        let word = self.memory.read(start);
        let decoded = Decoder::decode(word);

        if decoded.is_ok_and(|instr| self.parks_on_read(instr)) {
            // Rewind so the read is retried once input arrives.
            self.registers.set_ip(start);
            return Ok(StepOutcome::AwaitingInput);
        }

        self.emit(sink, TraceEvent::InstructionStart { ip: start, word });
        let instr = decoded?;

        match instr.opcode {
            Opcode::Add => self.execute_arithmetic(instr, i64::wrapping_add),
            Opcode::Multiply => self.execute_arithmetic(instr, i64::wrapping_mul),
            Opcode::LessThan => self.execute_compare(instr, CompareOp::LessThan),
            Opcode::Equals => self.execute_compare(instr, CompareOp::Equals),
            Opcode::ReadInput => self.execute_read_input(instr, sink),
            Opcode::WriteOutput => self.execute_write_output(instr, sink),
            Opcode::JumpIfTrue => self.execute_jump(instr, true),
            Opcode::JumpIfFalse => self.execute_jump(instr, false),
            Opcode::AdjustRelativeBase => self.execute_adjust_relative_base(instr),
            Opcode::Halt => {
                self.emit(sink, TraceEvent::Halted { ip: start });
                Ok(StepOutcome::Halted)
            }
        }
    }

    /// A read with nothing queued parks instead of executing under the suspend policy.
    fn parks_on_read(&self, instr: Instruction) -> bool {
        instr.opcode == Opcode::ReadInput
            && self.input.is_empty()
            && self.config.input_policy == InputPolicy::Suspend
    }

    fn emit(&self, sink: &mut dyn TraceSink, event: TraceEvent) {
        if self.config.tracing_enabled {
            sink.on_event(event);
        }
    }

    fn fetch_parameter(&mut self) -> Result<i64, Fault> {
        let addr = self.registers.advance_ip()?;
        Ok(self.memory.read(addr))
    }

    fn read_parameter(&mut self, instr: Instruction, param: u8) -> Result<i64, Fault> {
        let raw = self.fetch_parameter()?;
        Ok(self.load(raw, instr.mode(param)))
    }

    fn write_parameter(&mut self, instr: Instruction, param: u8, value: i64) -> Result<(), Fault> {
        let raw = self.fetch_parameter()?;
        self.store(raw, value, instr.mode(param))
    }

    fn execute_arithmetic(
        &mut self,
        instr: Instruction,
        op: fn(i64, i64) -> i64,
    ) -> Result<StepOutcome, Fault> {
        let lhs = self.read_parameter(instr, 1)?;
        let rhs = self.read_parameter(instr, 2)?;
        self.write_parameter(instr, 3, op(lhs, rhs))?;
        Ok(StepOutcome::Retired)
    }

    fn execute_compare(&mut self, instr: Instruction, op: CompareOp) -> Result<StepOutcome, Fault> {
        let lhs = self.read_parameter(instr, 1)?;
        let rhs = self.read_parameter(instr, 2)?;
        let holds = match op {
            CompareOp::LessThan => lhs < rhs,
            CompareOp::Equals => lhs == rhs,
        };
        self.write_parameter(instr, 3, i64::from(holds))?;
        Ok(StepOutcome::Retired)
    }

    fn execute_read_input(
        &mut self,
        instr: Instruction,
        sink: &mut dyn TraceSink,
    ) -> Result<StepOutcome, Fault> {
        let value = self.input.pop_front().ok_or(Fault::InputStarved)?;
        self.emit(sink, TraceEvent::InputConsumed { value });
        self.write_parameter(instr, 1, value)?;
        Ok(StepOutcome::Retired)
    }

    fn execute_write_output(
        &mut self,
        instr: Instruction,
        sink: &mut dyn TraceSink,
    ) -> Result<StepOutcome, Fault> {
        let value = self.read_parameter(instr, 1)?;
        self.output.push_back(value);
        self.emit(sink, TraceEvent::OutputProduced { value });
        Ok(StepOutcome::Retired)
    }

    fn execute_jump(&mut self, instr: Instruction, when_nonzero: bool) -> Result<StepOutcome, Fault> {
        let test = self.read_parameter(instr, 1)?;
        let target = self.read_parameter(instr, 2)?;

        if (test != 0) == when_nonzero {
            if target < 0 {
                return Err(Fault::OutOfBounds { target });
            }
            self.registers.set_ip(target);
        }
        Ok(StepOutcome::Retired)
    }

    fn execute_adjust_relative_base(&mut self, instr: Instruction) -> Result<StepOutcome, Fault> {
        let delta = self.read_parameter(instr, 1)?;
        self.registers.adjust_relative_base(delta);
        Ok(StepOutcome::Retired)
    }
}
