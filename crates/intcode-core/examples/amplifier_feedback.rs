//! Five-machine amplifier feedback loop.
//!
//! Each amplifier is its own [`Machine`] running the same program. Output of
//! one is fed as input to the next, and the last feeds back into the first
//! until every machine halts. The search tries each phase permutation and
//! reports the strongest final signal.
//!
//! ```sh
//! cargo run -p intcode-core --example amplifier_feedback
//! ```

use intcode_core::{Fault, Machine};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const PROGRAM: [i64; 29] = [
    3, 26, 1001, 26, -4, 26, 3, 27, 1002, 27, 2, 27, 1, 27, 26, 27, 4, 27, 1001, 28, -1, 28, 1005,
    28, 6, 99, 0, 0, 5,
];

fn feedback_signal(program: &[i64], phases: &[i64]) -> Result<i64, Fault> {
    let mut amps: Vec<Machine> = phases
        .iter()
        .map(|&phase| {
            let mut amp = Machine::new(program);
            amp.push_input(phase);
            amp
        })
        .collect();

    let mut signal = 0;
    loop {
        for amp in &mut amps {
            amp.push_input(signal);
            match amp.run_until_output()? {
                Some(value) => signal = value,
                None => return Ok(signal),
            }
        }
    }
}

fn permutations(items: &[i64]) -> Vec<Vec<i64>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for (index, &head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn main() -> Result<(), Fault> {
    let mut best = (i64::MIN, Vec::new());

    for phases in permutations(&[5, 6, 7, 8, 9]) {
        let signal = feedback_signal(&PROGRAM, &phases)?;
        if signal > best.0 {
            best = (signal, phases);
        }
    }

    println!("best_signal={}", best.0);
    println!("phases={:?}", best.1);

    Ok(())
}
