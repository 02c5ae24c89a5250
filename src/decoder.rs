use crate::{constants, InstrFormat, Opcode, Word};
use num_traits::FromPrimitive;
use std::fmt;

/// All fields of an instruction word, extracted unconditionally.
///
/// Register fields keep their full byte so the raw encoding stays
/// inspectable; only the low five bits select a register. Decoding never
/// fails: a reserved opcode leaves `opcode` as `None` and it is up to the
/// scheduler to reject the instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    pub raw: Word,
    pub opcode_value: u8,
    pub opcode: Option<Opcode>,
    pub ra: u8,
    pub rb: u8,
    pub rc: u8,
    pub const16: u16,
    pub address: u32,
    pub branch_offset: u8,
}

impl DecodedInstruction {
    pub fn decode(word: Word) -> DecodedInstruction {
        let opcode_value = ((word & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET) as u8;

        DecodedInstruction {
            raw: word,
            opcode_value,
            opcode: Opcode::from_u8(opcode_value),
            ra: ((word & constants::RA_MASK) >> constants::RA_OFFSET) as u8,
            rb: ((word & constants::RB_MASK) >> constants::RB_OFFSET) as u8,
            rc: ((word & constants::RC_MASK) >> constants::RC_OFFSET) as u8,
            const16: ((word & constants::CONST16_MASK) >> constants::CONST16_OFFSET) as u16,
            address: (word & constants::ADDRESS24_MASK) >> constants::ADDRESS24_OFFSET,
            branch_offset: ((word & constants::BRANCH_OFFSET_MASK)
                >> constants::BRANCH_OFFSET_OFFSET) as u8,
        }
    }

    pub fn format(&self) -> InstrFormat {
        match self.opcode {
            Some(oc) => oc.format(),
            None => InstrFormat::Unknown,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self.opcode {
            Some(oc) => oc.mnemonic(),
            None => "UNKNOWN",
        }
    }
}

impl fmt::Display for DecodedInstruction {
    /// Renders the instruction as assembly, operands in source order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ra = self.ra & constants::REGISTER_INDEX_MASK;
        let rb = self.rb & constants::REGISTER_INDEX_MASK;
        let rc = self.rc & constants::REGISTER_INDEX_MASK;

        write!(f, "{:8}", self.mnemonic())?;

        match self.format() {
            InstrFormat::ThreeReg => write!(f, " R{}, R{}, R{}", rc, ra, rb),
            InstrFormat::TwoReg | InstrFormat::Store => write!(f, " R{}, R{}", rc, ra),
            InstrFormat::OneReg => write!(f, " R{}", rc),
            InstrFormat::LoadConst => write!(f, " R{}, 0x{:04x}", rc, self.const16),
            InstrFormat::Branch => write!(f, " R{}, R{}, 0x{:02x}", ra, rb, self.branch_offset),
            InstrFormat::Jump => write!(f, " 0x{:06x}", self.address),
            InstrFormat::NoOperand | InstrFormat::Unknown => Ok(()),
        }
    }
}
