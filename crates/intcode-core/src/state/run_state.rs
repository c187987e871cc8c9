use crate::fault::Fault;

/// Execution-state machine for host-observable control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RunState {
    /// Ready to execute the next instruction.
    #[default]
    Running,
    /// Parked on a `read_input` with an empty queue; resumes once input is pushed.
    AwaitingInput,
    /// The halt instruction retired. No further progress is possible.
    Halted,
    /// A fault is latched and no further progress is possible.
    FaultLatched(Fault),
}

impl RunState {
    /// Returns the currently latched fault, if this state is fault-latched.
    #[must_use]
    pub const fn latched_fault(self) -> Option<Fault> {
        match self {
            Self::FaultLatched(fault) => Some(fault),
            Self::Running | Self::AwaitingInput | Self::Halted => None,
        }
    }
}
