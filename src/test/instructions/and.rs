use super::*;

#[test]
fn mixed_bits() {
    instruction_runs! {
        instr_reg!(AND, 3, 1, 2),
        [1 = 0b1100, 2 = 0b1010] => [3 = 0b1000]
    };
}

#[test]
fn disjoint_bits_set_zero() {
    instruction_sets_flags! {
        instr_reg!(AND, 3, 1, 2),
        [1 = 0xF0F0, 2 = 0x0F0F] => [3 = 0],
        logical_flags(false, true)
    };
}
