use super::*;

#[test]
fn shifts_left_filling_zero() {
    instruction_runs! {
        instr_reg!(LSL, 3, 1, 2),
        [1 = 0b101, 2 = 2] => [3 = 0b10100]
    };
}

#[test]
fn matches_asl() {
    let left = instruction_runs! {
        instr_reg!(LSL, 3, 1, 2),
        [1 = 0x4000_0001, 2 = 2] => [3 = 0x0000_0004]
    };
    let right = instruction_runs! {
        instr_reg!(ASL, 3, 1, 2),
        [1 = 0x4000_0001, 2 = 2] => [3 = 0x0000_0004]
    };

    assert_eq!(left.cpu().read(3), right.cpu().read(3));
}
