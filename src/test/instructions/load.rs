use super::*;

#[test]
fn loads_the_word_at_the_source_address() {
    let mut memory = Memory::new();
    memory.write_block(0, &[instr_reg!(LOAD, 2, 1), halt!()]);
    memory.write(0x100, 0xCAFE_BABE);

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 0x100);
    sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.cpu().read(2), 0xCAFE_BABE);
}

#[test]
fn address_is_masked_to_16_bits() {
    let mut memory = Memory::new();
    memory.write_block(0, &[instr_reg!(LOAD, 2, 1), halt!()]);
    memory.write(0x100, 7);

    let mut sim = Simulator::new(memory);
    sim.cpu_mut().write(1, 0xABCD_0100);
    sim.run(constants::DEFAULT_MAX_CYCLES);

    assert_eq!(sim.cpu().read(2), 7);
}
