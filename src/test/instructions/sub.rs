use super::*;

#[test]
fn positive() {
    instruction_runs! {
        instr_reg!(SUB, 3, 1, 2),
        [1 = 5678, 2 = 1234] => [3 = 4444]
    };
}

#[test]
fn negative_result() {
    instruction_sets_flags! {
        instr_reg!(SUB, 3, 1, 2),
        [1 = 3, 2 = 5] => [3 = -2],
        arithmetic_flags(true, false, true, false)
    };
}

#[test]
fn equal_operands_set_zero() {
    instruction_sets_flags! {
        instr_reg!(SUB, 3, 1, 1),
        [1 = 77] => [3 = 0],
        arithmetic_flags(false, true, false, false)
    };
}

#[test]
fn signed_overflow() {
    instruction_sets_flags! {
        instr_reg!(SUB, 3, 1, 2),
        [1 = 0x8000_0000, 2 = 1] => [3 = 0x7FFF_FFFF],
        arithmetic_flags(false, false, false, true)
    };
}
