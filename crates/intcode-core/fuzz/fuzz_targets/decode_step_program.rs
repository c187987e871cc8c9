#![no_main]

use intcode_core::{
    disassemble_range, Decoder, InputPolicy, Machine, MachineConfig, StepOutcome, TraceLog,
};
use libfuzzer_sys::fuzz_target;

const STEP_BOUND: usize = 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let policy = if data[0] & 1 == 0 {
        InputPolicy::Strict
    } else {
        InputPolicy::Suspend
    };
    let program: Vec<i64> = data[1..]
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0_u8; 8];
            bytes.copy_from_slice(chunk);
            i64::from_be_bytes(bytes)
        })
        .collect();

    for word in &program {
        let _ = Decoder::decode(*word);
    }

    let config = MachineConfig {
        input_policy: policy,
        tracing_enabled: true,
    };
    let mut machine = Machine::with_config(&program, &config);
    machine.extend_input(program.iter().copied().take(4));
    let mut trace = TraceLog::default();

    for _ in 0..STEP_BOUND {
        match machine.step_traced(&mut trace) {
            Ok(StepOutcome::Retired) => {}
            Ok(StepOutcome::Halted | StepOutcome::AwaitingInput) | Err(_) => break,
        }
    }

    let _ = disassemble_range(&machine.memory, 0, program.len());
});
