//! End-to-end program scenarios covering every opcode and addressing mode.

#![allow(clippy::pedantic, clippy::nursery)]

use intcode_core::{Fault, FaultClass, Machine, ParameterMode, RunState, StepOutcome};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const EQUALS_EIGHT_POSITION: [i64; 11] = [3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
const LESS_THAN_EIGHT_POSITION: [i64; 11] = [3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];
const EQUALS_EIGHT_IMMEDIATE: [i64; 9] = [3, 3, 1108, -1, 8, 3, 4, 3, 99];
const LESS_THAN_EIGHT_IMMEDIATE: [i64; 9] = [3, 3, 1107, -1, 8, 3, 4, 3, 99];

const COMPARE_TO_EIGHT: [i64; 47] = [
    3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0, 0,
    1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4, 20, 1105,
    1, 46, 98, 99,
];

const QUINE: [i64; 16] = [
    109, 1, 204, -1, 1001, 100, 1, 100, 1008, 100, 16, 101, 1006, 101, 0, 99,
];

fn run_with_input(program: &[i64], input: &[i64]) -> Vec<i64> {
    let mut machine = Machine::new(program);
    machine.extend_input(input.iter().copied());
    machine.run_to_end().expect("program should halt");
    machine.drain_output()
}

#[test]
fn add_program_overwrites_its_first_word() {
    let mut machine = Machine::new(&[1, 0, 0, 0, 99]);
    machine.run_to_end().expect("halts");

    assert_eq!(machine.memory.read(0), 2);
    assert!(machine.is_done());
}

#[test]
fn multiply_with_immediate_patches_halt_into_place() {
    let mut machine = Machine::new(&[1002, 4, 3, 4, 33]);
    machine.run_to_end().expect("halts");

    assert_eq!(machine.memory.read(4), 99);
    assert!(machine.is_done());
}

#[rstest]
#[case(&[2, 3, 0, 3, 99], &[2, 3, 0, 6, 99])]
#[case(&[2, 4, 4, 5, 99, 0], &[2, 4, 4, 5, 99, 9801])]
#[case(&[1, 1, 1, 4, 99, 5, 6, 0, 99], &[30, 1, 1, 4, 2, 5, 6, 0, 99])]
fn arithmetic_programs_leave_expected_memory(#[case] program: &[i64], #[case] expected: &[i64]) {
    let mut machine = Machine::new(program);
    machine.run_to_end().expect("halts");

    assert_eq!(machine.memory.to_vec(0, expected.len()), expected);
}

#[test]
fn echo_returns_input_then_halts() {
    let mut machine = Machine::new(&[3, 0, 4, 0, 99]);
    machine.push_input(42);

    assert_eq!(machine.run_until_output(), Ok(Some(42)));
    assert_eq!(machine.run_until_output(), Ok(None));
    assert!(machine.is_done());
}

#[rstest]
#[case(&EQUALS_EIGHT_POSITION, 8, 1)]
#[case(&EQUALS_EIGHT_POSITION, 7, 0)]
#[case(&EQUALS_EIGHT_POSITION, 9, 0)]
#[case(&LESS_THAN_EIGHT_POSITION, 7, 1)]
#[case(&LESS_THAN_EIGHT_POSITION, 8, 0)]
#[case(&EQUALS_EIGHT_IMMEDIATE, 8, 1)]
#[case(&EQUALS_EIGHT_IMMEDIATE, -8, 0)]
#[case(&LESS_THAN_EIGHT_IMMEDIATE, -100, 1)]
#[case(&LESS_THAN_EIGHT_IMMEDIATE, 9, 0)]
fn comparison_programs(#[case] program: &[i64], #[case] input: i64, #[case] expected: i64) {
    assert_eq!(run_with_input(program, &[input]), vec![expected]);
}

#[rstest]
#[case(&[3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9], 0, 0)]
#[case(&[3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9], 5, 1)]
#[case(&[3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1], 0, 0)]
#[case(&[3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1], -2, 1)]
fn jump_programs_test_for_zero(#[case] program: &[i64], #[case] input: i64, #[case] expected: i64) {
    assert_eq!(run_with_input(program, &[input]), vec![expected]);
}

#[rstest]
#[case(7, 999)]
#[case(8, 1000)]
#[case(9, 1001)]
fn longer_comparison_program(#[case] input: i64, #[case] expected: i64) {
    assert_eq!(run_with_input(&COMPARE_TO_EIGHT, &[input]), vec![expected]);
}

#[test]
fn relative_mode_quine_outputs_itself() {
    assert_eq!(run_with_input(&QUINE, &[]), QUINE.to_vec());
}

#[test]
fn large_products_are_preserved() {
    let output = run_with_input(&[1102, 34_915_192, 34_915_192, 7, 4, 7, 99, 0], &[]);
    assert_eq!(output, vec![1_219_070_632_396_864]);
    assert_eq!(output[0].to_string().len(), 16);
}

#[test]
fn large_literals_are_preserved() {
    assert_eq!(
        run_with_input(&[104, 1_125_899_906_842_624, 99], &[]),
        vec![1_125_899_906_842_624]
    );
}

#[test]
fn relative_input_write_lands_past_program() {
    // ARB 2000; IN [rb-7]; OUT [rb-7]; HALT
    let output = run_with_input(&[109, 2000, 203, -7, 204, -7, 99], &[55]);
    assert_eq!(output, vec![55]);
}

#[test]
fn relative_base_moves_in_both_directions() {
    let mut machine = Machine::new(&[109, 19, 109, -4, 204, -15, 99]);
    machine.run_to_end().expect("halts");

    assert_eq!(machine.relative_base(), 15);
    assert_eq!(machine.drain_output(), vec![109]);
}

#[test]
fn illegal_mode_digits_fail_first_step() {
    let mut machine = Machine::new(&[99_999]);

    let fault = machine.step().expect_err("decode must fail");
    assert_eq!(
        fault,
        Fault::IllegalMode {
            word: 99_999,
            digit: 9
        }
    );
    assert_eq!(fault.class(), FaultClass::Decode);
    assert_eq!(machine.run_state, RunState::FaultLatched(fault));
}

#[rstest]
#[case::add(&[11_101, 1, 1, 0, 99], &[])]
#[case::multiply(&[11_102, 1, 1, 0, 99], &[])]
#[case::less_than(&[11_107, 1, 2, 0, 99], &[])]
#[case::equals(&[11_108, 1, 1, 0, 99], &[])]
#[case::position_sources(&[10_001, 0, 0, 0, 99], &[])]
#[case::relative_sources(&[12_201, 0, 0, 0, 99], &[])]
#[case::read_input(&[103, 0, 99], &[6])]
fn immediate_write_targets_fail_identically(#[case] program: &[i64], #[case] input: &[i64]) {
    let mut machine = Machine::new(program);
    machine.extend_input(input.iter().copied());

    assert_eq!(machine.step(), Err(Fault::ImmediateWrite));
    assert_eq!(Fault::ImmediateWrite.class(), FaultClass::Operand);
    assert_eq!(machine.memory.read(0), program[0]);
}

#[test]
fn host_store_through_immediate_matches_engine_fault() {
    let mut machine = Machine::new(&[99]);
    assert_eq!(
        machine.store(0, 1, ParameterMode::Immediate),
        Err(Fault::ImmediateWrite)
    );
}

#[test]
fn jump_to_negative_address_is_out_of_bounds() {
    let mut machine = Machine::new(&[1105, 1, -1]);

    assert_eq!(machine.run_to_end(), Err(Fault::OutOfBounds { target: -1 }));
    assert_eq!(
        Fault::OutOfBounds { target: -1 }.class(),
        FaultClass::OutOfBounds
    );
}

#[test]
fn starved_read_is_fatal_under_strict_policy() {
    let mut machine = Machine::new(&[3, 0, 99]);

    assert_eq!(machine.run_to_end(), Err(Fault::InputStarved));
    assert_eq!(machine.latched_fault(), Some(Fault::InputStarved));
    assert!(!machine.is_done());
}

#[test]
fn step_reports_halt_explicitly() {
    let mut machine = Machine::new(&[1101, 2, 3, 5, 99]);

    assert_eq!(machine.step(), Ok(StepOutcome::Retired));
    assert_eq!(machine.step(), Ok(StepOutcome::Halted));
    assert!(machine.is_done());
    assert_eq!(machine.instruction_pointer(), 5);
}
