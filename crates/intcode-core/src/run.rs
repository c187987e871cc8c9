//! Composite run loops and their suspension points.
//!
//! Each loop is a straight sequence of [`Machine::step`] calls that hands
//! control back to the caller at one well-defined boundary. There are no
//! internal timeouts: a program that never reaches its boundary keeps the
//! call running, so bounding execution is left to the caller.

use crate::api::{NoopTrace, RunBoundary, RunOutcome, StepOutcome, StopReason, TraceSink};
use crate::decoder::Decoder;
use crate::encoding::Opcode;
use crate::fault::Fault;
use crate::machine::Machine;

impl Machine {
    /// Steps until `boundary` is reached or the machine halts.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised, or the fault already latched.
    pub fn run_until(&mut self, boundary: RunBoundary) -> Result<RunOutcome, Fault> {
        self.run_until_traced(boundary, &mut NoopTrace)
    }

    /// Traced form of [`Machine::run_until`].
    ///
    /// # Errors
    ///
    /// Same as [`Machine::run_until`].
    pub fn run_until_traced(
        &mut self,
        boundary: RunBoundary,
        sink: &mut dyn TraceSink,
    ) -> Result<RunOutcome, Fault> {
        let mut steps = 0_u64;

        loop {
            if boundary == RunBoundary::Output {
                if let Some(value) = self.output.pop_front() {
                    return Ok(RunOutcome {
                        steps,
                        stop: StopReason::Output(value),
                    });
                }
            }

            if let Some(fault) = self.latched_fault() {
                return Err(fault);
            }

            if self.is_done() {
                return Ok(RunOutcome {
                    steps,
                    stop: StopReason::Halted,
                });
            }

            if boundary == RunBoundary::InputExhausted && self.needs_input() {
                return Ok(RunOutcome {
                    steps,
                    stop: StopReason::AwaitingInput,
                });
            }

            match self.step_traced(sink)? {
                StepOutcome::Retired | StepOutcome::Halted => steps += 1,
                StepOutcome::AwaitingInput => {
                    return Ok(RunOutcome {
                        steps,
                        stop: StopReason::AwaitingInput,
                    });
                }
            }
        }
    }

    /// Steps until the machine halts.
    ///
    /// Under [`crate::InputPolicy::Suspend`] this also returns when the
    /// program blocks on input; check [`Machine::is_done`] to tell the two
    /// apart.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised, including [`Fault::InputStarved`]
    /// when the program reads past the queued input under the strict policy.
    pub fn run_to_end(&mut self) -> Result<(), Fault> {
        self.run_until(RunBoundary::Halted).map(|_| ())
    }

    /// Steps until the machine halts or is about to read from an empty
    /// input queue.
    ///
    /// # Errors
    ///
    /// Returns the first fault raised. Never raises [`Fault::InputStarved`].
    pub fn run_while_input(&mut self) -> Result<(), Fault> {
        self.run_until(RunBoundary::InputExhausted).map(|_| ())
    }

    /// Steps until an output value is available and returns it.
    ///
    /// Returns `None` once the machine halts with nothing left to return, or
    /// when it blocks on input under [`crate::InputPolicy::Suspend`].
    ///
    /// # Errors
    ///
    /// Returns the first fault raised.
    pub fn run_until_output(&mut self) -> Result<Option<i64>, Fault> {
        let outcome = self.run_until(RunBoundary::Output)?;
        Ok(match outcome.stop {
            StopReason::Output(value) => Some(value),
            StopReason::Halted | StopReason::AwaitingInput => None,
        })
    }

    /// Returns `true` when the next instruction is a read and no input is
    /// queued for it.
    #[must_use]
    pub fn needs_input(&self) -> bool {
        self.input.is_empty()
            && Decoder::decode(self.memory.read(self.registers.ip()))
                .is_ok_and(|instr| instr.opcode == Opcode::ReadInput)
    }
}
