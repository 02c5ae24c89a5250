use super::*;

#[test]
fn replaces_the_high_half() {
    instruction_runs! {
        instr_lconst!(LCH, 2, 0xDEAD),
        [2 = 0x1234_5678] => [2 = 0xDEAD_5678]
    };
}

#[test]
fn leaves_the_flags_alone() {
    // SUB of equal values sets zero; LCH must not clear it.
    let (sim, _) = run_program(&[
        instr_reg!(SUB, 3, 1, 1),
        instr_lconst!(LCH, 2, 0xFFFF),
        halt!(),
    ]);

    assert!(sim.cpu().flags().zero);
    assert_eq!(sim.cpu().read(2), 0xFFFF_0000);
}
