use super::*;

#[test]
fn jumps_to_the_register_value() {
    let mut program = vec![0; 6];
    program[0] = instr_lconst!(LCL, 1, 5);
    program[1] = instr_reg!(JR, 1);
    program[2] = halt!();
    program[5] = halt!();

    let (sim, summary) = run_program(&program);

    assert_eq!(sim.cpu().pc(), 6);
    assert_eq!(summary.instructions, 3);
}

#[test]
fn target_is_masked_to_16_bits() {
    let mut memory = Memory::new();
    memory.write_block(0, &[instr_reg!(JR, 1), halt!(), halt!()]);

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 0xABCD_0002);
    sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.cpu().pc(), 3);
}
