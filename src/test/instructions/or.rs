use super::*;

#[test]
fn mixed_bits() {
    instruction_runs! {
        instr_reg!(OR, 3, 1, 2),
        [1 = 0b1100, 2 = 0b1010] => [3 = 0b1110]
    };
}

#[test]
fn zero_operands() {
    instruction_sets_flags! {
        instr_reg!(OR, 3, 1, 2),
        [] => [3 = 0],
        logical_flags(false, true)
    };
}
