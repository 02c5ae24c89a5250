use super::*;

#[test]
fn preserves_the_sign_bit() {
    instruction_runs! {
        instr_reg!(ASR, 3, 1, 2),
        [1 = -8, 2 = 1] => [3 = -4]
    };
}

#[test]
fn positive_values_shift_like_lsr() {
    instruction_runs! {
        instr_reg!(ASR, 3, 1, 2),
        [1 = 8, 2 = 2] => [3 = 2]
    };
}

#[test]
fn full_shift_of_negative_is_all_ones() {
    instruction_sets_flags! {
        instr_reg!(ASR, 3, 1, 2),
        [1 = 0x8000_0000, 2 = 31] => [3 = 0xFFFF_FFFF],
        logical_flags(true, false)
    };
}
