use super::*;

#[test]
fn replaces_the_low_half() {
    instruction_runs! {
        instr_lconst!(LCL, 2, 0xBEEF),
        [2 = 0x1234_5678] => [2 = 0x1234_BEEF]
    };
}

#[test]
fn pairs_with_lch_to_build_a_word() {
    let (sim, _) = run_program(&[
        instr_lconst!(LCH, 2, 0xDEAD),
        instr_lconst!(LCL, 2, 0xBEEF),
        halt!(),
    ]);

    assert_eq!(sim.cpu().read(2), 0xDEAD_BEEF);
}
