use super::*;

#[test]
fn remainder() {
    instruction_runs! {
        instr_reg!(MOD, 3, 1, 2),
        [1 = 10, 2 = 3] => [3 = 1]
    };
}

#[test]
fn sign_follows_the_divisor() {
    instruction_runs! {
        instr_reg!(MOD, 3, 1, 2),
        [1 = -7, 2 = 2] => [3 = 1]
    };
}

#[test]
fn zero_divisor_recovers_with_zero() {
    instruction_sets_flags! {
        instr_reg!(MOD, 3, 1, 2),
        [1 = 10] => [3 = 0],
        arithmetic_flags(false, true, false, false)
    };
}
