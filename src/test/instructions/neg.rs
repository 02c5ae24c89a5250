use super::*;

#[test]
fn negates_a_positive_value() {
    instruction_runs! {
        instr_reg!(NEG, 2, 1),
        [1 = 5] => [2 = -5]
    };
}

#[test]
fn negates_a_negative_value() {
    instruction_runs! {
        instr_reg!(NEG, 2, 1),
        [1 = -5] => [2 = 5]
    };
}

#[test]
fn negating_zero_sets_zero() {
    instruction_sets_flags! {
        instr_reg!(NEG, 2, 1),
        [] => [2 = 0],
        arithmetic_flags(false, true, false, false)
    };
}

#[test]
fn negating_min_overflows() {
    instruction_sets_flags! {
        instr_reg!(NEG, 2, 1),
        [1 = 0x8000_0000] => [2 = 0x8000_0000],
        arithmetic_flags(true, false, true, true)
    };
}
