use super::*;

#[test]
fn adds_one() {
    instruction_runs! {
        instr_reg!(INC, 2, 1),
        [1 = 41] => [2 = 42]
    };
}

#[test]
fn wrap_sets_carry_and_zero() {
    instruction_sets_flags! {
        instr_reg!(INC, 2, 1),
        [1 = 0xFFFF_FFFF] => [2 = 0],
        arithmetic_flags(false, true, true, false)
    };
}

#[test]
fn crossing_the_sign_boundary_overflows() {
    instruction_sets_flags! {
        instr_reg!(INC, 2, 1),
        [1 = 0x7FFF_FFFF] => [2 = 0x8000_0000],
        arithmetic_flags(true, false, false, true)
    };
}
