use super::*;

#[test]
fn subtracts_one() {
    instruction_runs! {
        instr_reg!(DEC, 2, 1),
        [1 = 42] => [2 = 41]
    };
}

#[test]
fn borrow_below_zero() {
    instruction_sets_flags! {
        instr_reg!(DEC, 2, 1),
        [] => [2 = 0xFFFF_FFFF],
        arithmetic_flags(true, false, true, false)
    };
}

#[test]
fn crossing_the_sign_boundary_overflows() {
    instruction_sets_flags! {
        instr_reg!(DEC, 2, 1),
        [1 = 0x8000_0000] => [2 = 0x7FFF_FFFF],
        arithmetic_flags(false, false, false, true)
    };
}
