use super::*;

#[test]
fn reserved_opcode_halts_the_machine() {
    let (_, summary) = run_program(&[0x0D00_0001]);

    assert!(summary.halted);
    // The machine stops in EX_MEM; the instruction never reaches WB.
    assert_eq!(summary.instructions, 0);
    assert_eq!(summary.cycles, 3);
}

#[test]
fn opcode_zero_is_invalid() {
    // An empty memory fetches the all-zero word.
    let (_, summary) = run_program(&[]);

    assert!(summary.halted);
    assert_eq!(summary.instructions, 0);
}

#[test]
fn state_before_the_invalid_opcode_is_kept() {
    let (sim, _) = run_program(&[instr_lconst!(LCL, 1, 7), 0x0D00_0001]);

    assert_eq!(sim.cpu().read(1), 7);
}
