use super::*;

#[test]
fn taken_when_equal() {
    let mut program = vec![0; 0x9];
    program[0] = instr_branch!(BEQ, 1, 2, 0x08);
    program[1] = halt!();
    program[8] = halt!();

    let (sim, _) = run_program(&program);

    // Both registers start at zero, so the branch is taken.
    assert_eq!(sim.cpu().pc(), 9);
}

#[test]
fn not_taken_when_different() {
    let mut memory = Memory::new();
    memory.write_block(
        0,
        &[instr_branch!(BEQ, 1, 2, 0x08), halt!()],
    );

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 1);
    sim.cpu_mut().write(2, 2);
    let summary = sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.cpu().pc(), 2);
    assert_eq!(summary.instructions, 2);
}
