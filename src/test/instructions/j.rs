use super::*;

#[test]
fn jumps_unconditionally() {
    let (sim, summary) = run_program(&[instr_jump!(J, 2), halt!(), halt!()]);

    assert_eq!(sim.cpu().pc(), 3);
    assert_eq!(summary.instructions, 2);
}

#[test]
fn does_not_link() {
    let (sim, _) = run_program(&[instr_jump!(J, 2), halt!(), halt!()]);

    assert_eq!(sim.cpu().read(31), 0);
}
