use super::*;

#[test]
fn shifts_right_filling_zero() {
    instruction_runs! {
        instr_reg!(LSR, 3, 1, 2),
        [1 = 0x8000_0000, 2 = 31] => [3 = 1]
    };
}

#[test]
fn shift_amount_uses_low_five_bits() {
    instruction_runs! {
        instr_reg!(LSR, 3, 1, 2),
        [1 = 4, 2 = 34] => [3 = 1]
    };
}
