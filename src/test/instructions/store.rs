use super::*;

#[test]
fn stores_the_source_at_the_destination_address() {
    let mut memory = Memory::new();
    memory.write_block(0, &[instr_reg!(STORE, 2, 1), halt!()]);

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 0xCAFE_BABE);
    sim.cpu_mut().write(2, 0x200);
    sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.memory().read(0x200), 0xCAFE_BABE);
}

#[test]
fn store_does_not_write_back_a_register() {
    let mut memory = Memory::new();
    memory.write_block(0, &[instr_reg!(STORE, 2, 1), halt!()]);

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 11);
    sim.cpu_mut().write(2, 0x200);
    sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.cpu().read(1), 11);
    assert_eq!(sim.cpu().read(2), 0x200);
}
