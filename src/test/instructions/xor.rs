use super::*;

#[test]
fn mixed_bits() {
    instruction_runs! {
        instr_reg!(XOR, 3, 1, 2),
        [1 = 0b1100, 2 = 0b1010] => [3 = 0b0110]
    };
}

#[test]
fn clears_carry_and_overflow() {
    instruction_sets_flags! {
        instr_reg!(XOR, 3, 1, 2),
        [1 = 0x8000_0000, 2 = 0] => [3 = 0x8000_0000],
        logical_flags(true, false)
    };
}

#[test]
fn self_xor_is_zero() {
    instruction_sets_flags! {
        instr_reg!(XOR, 3, 1, 1),
        [1 = 0x1234_5678] => [3 = 0],
        logical_flags(false, true)
    };
}
