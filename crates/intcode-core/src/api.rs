//! Public host-facing contracts for driving Intcode machines.

use crate::fault::Fault;

/// Behavior of `read_input` when the input queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum InputPolicy {
    /// Reading an empty queue raises [`Fault::InputStarved`].
    #[default]
    Strict,
    /// Reading an empty queue parks the machine before the read instruction.
    ///
    /// The step reports [`StepOutcome::AwaitingInput`] and the same
    /// instruction is retried on the next step.
    Suspend,
}

/// Configuration for a machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MachineConfig {
    /// Empty-input behavior of `read_input`.
    pub input_policy: InputPolicy,
    /// Enables trace callback dispatch in the traced stepping APIs.
    pub tracing_enabled: bool,
}

/// Output status from one instruction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// An instruction retired and the machine keeps running.
    Retired,
    /// The halt instruction retired, or the machine had already halted.
    Halted,
    /// A read found no input under [`InputPolicy::Suspend`]; nothing retired.
    AwaitingInput,
}

/// Stop conditions for [`crate::Machine::run_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunBoundary {
    /// Run until the machine halts.
    Halted,
    /// Also stop right before a `read_input` that would find the queue empty.
    InputExhausted,
    /// Also stop as soon as the output queue holds a value, and pop it.
    Output,
}

/// Why a run call returned control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The machine is halted.
    Halted,
    /// The next instruction needs input that is not queued yet.
    AwaitingInput,
    /// A value was popped from the output queue.
    Output(i64),
}

/// Aggregated outcome of running multiple steps until a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Number of instructions retired during this run call.
    pub steps: u64,
    /// Condition that ended the run.
    pub stop: StopReason,
}

/// Trace events emitted in execution order when tracing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// An instruction word was fetched.
    InstructionStart {
        /// Address the word was fetched from.
        ip: i64,
        /// Raw instruction word.
        word: i64,
    },
    /// `read_input` consumed a value.
    InputConsumed {
        /// Value popped from the input queue.
        value: i64,
    },
    /// `write_output` produced a value.
    OutputProduced {
        /// Value pushed to the output queue.
        value: i64,
    },
    /// The halt instruction retired.
    Halted {
        /// Address of the halt instruction.
        ip: i64,
    },
    /// A fault latched on the machine.
    FaultRaised {
        /// Latched fault.
        fault: Fault,
        /// Address of the instruction that faulted.
        ip: i64,
    },
}

/// Sink trait for trace hooks.
pub trait TraceSink {
    /// Records an event in execution order.
    fn on_event(&mut self, event: TraceEvent);
}

/// Trace sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn on_event(&mut self, _event: TraceEvent) {}
}

/// Trace sink that records every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    /// Recorded events, oldest first.
    pub events: Vec<TraceEvent>,
}

impl TraceSink for TraceLog {
    fn on_event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
