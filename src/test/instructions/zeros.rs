use super::*;

#[test]
fn clears_the_destination() {
    instruction_runs! {
        instr_reg!(ZEROS, 4),
        [4 = 0xDEAD_BEEF] => [4 = 0]
    };
}

#[test]
fn sets_only_the_zero_flag() {
    instruction_sets_flags! {
        instr_reg!(ZEROS, 4),
        [4 = 1] => [4 = 0],
        arithmetic_flags(false, true, false, false)
    };
}
