use crate::{constants, Word};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;
use std::{error::Error as StdError, fmt, str::FromStr};

// Instruction Formats
//
//            +--------+--------+--------+--------+
//            |31    24|23    16|15     8|7      0|
//            +--------+--------+--------+--------+
// 3reg       | opcode |   ra   |   rb   |   rc   |
//            +--------+--------+--------+--------+
// 2reg/store | opcode |   ra   |   0    |   rc   |
//            +--------+--------+--------+--------+
// 1reg       | opcode |   0    |   0    |   rc   |
//            +--------+--------+--------+--------+
// lconst     | opcode |     const16     |   rc   |
//            +--------+--------+--------+--------+
// branch     | opcode |   ra   |   rb   |offset8 |
//            +--------+--------+--------+--------+
// jump       | opcode |         address24        |
//            +--------+--------+--------+--------+

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    //  Mnemonic     | Name                   | Format | Effect
    //---------------+------------------------+--------+--------------------------------
    ADD = 0x01,      // | Add                 | 3reg   | Rc = Ra + Rb
    SUB = 0x02,      // | Subtract            | 3reg   | Rc = Ra - Rb
    ZEROS = 0x03,    // | Clear               | 1reg   | Rc = 0
    XOR = 0x04,      // | Exclusive-Or        | 3reg   | Rc = Ra ^ Rb
    OR = 0x05,       // | Or                  | 3reg   | Rc = Ra | Rb
    PASSNOTA = 0x06, // | Complement (NOT)    | 2reg   | Rc = ~Ra
    AND = 0x07,      // | And                 | 3reg   | Rc = Ra & Rb
    ASL = 0x08,      // | Arith. shift left   | 3reg   | Rc = Ra << Rb
    ASR = 0x09,      // | Arith. shift right  | 3reg   | Rc = Ra >> Rb (inserting sign bit)
    LSL = 0x0A,      // | Logical shift left  | 3reg   | Rc = Ra << Rb
    LSR = 0x0B,      // | Logical shift right | 3reg   | Rc = Ra >> Rb (inserting zeros)
    PASSA = 0x0C,    // | Copy                | 2reg   | Rc = Ra
    LCH = 0x0E,      // | Load const high     | lconst | Rc[16..31] = const16
    LCL = 0x0F,      // | Load const low      | lconst | Rc[0..15] = const16
    LOAD = 0x10,     // | Load word           | 2reg   | Rc = MEM[Ra]
    STORE = 0x11,    // | Store word          | store  | MEM[Rc] = Ra
    JAL = 0x12,      // | Jump and link       | jump   | R31 = PC; PC = address24
    JR = 0x13,       // | Jump register       | 1reg   | PC = Rc
    BEQ = 0x14,      // | Branch if equal     | branch | PC = offset8 if Ra == Rb
    BNE = 0x15,      // | Branch if not equal | branch | PC = offset8 if Ra != Rb
    J = 0x16,        // | Jump                | jump   | PC = address24
    SLT = 0x17,      // | Set if less than    | 3reg   | Rc = (Ra < Rb) ? 1 : 0
    MUL = 0x18,      // | Multiply            | 3reg   | Rc = Ra * Rb
    DIV = 0x19,      // | Divide              | 3reg   | Rc = Ra / Rb
    MOD = 0x1A,      // | Modulo              | 3reg   | Rc = Ra mod Rb
    NEG = 0x1B,      // | Negate              | 2reg   | Rc = -Ra
    INC = 0x1C,      // | Increment           | 2reg   | Rc = Ra + 1
    DEC = 0x1D,      // | Decrement           | 2reg   | Rc = Ra - 1
    NOP = 0x1E,      // | No-op               | none   | Does nothing
    HALT = 0xFF,     // | Halt                | none   | Stops the CPU (all-ones word)
}

/// Operand layout of an instruction word.
///
/// `Store` shares the bit layout of `TwoReg` but reverses the data flow
/// (`Ra` goes *to* memory at the address in `Rc`), so the scheduler treats
/// it separately.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InstrFormat {
    ThreeReg,
    TwoReg,
    OneReg,
    LoadConst,
    Store,
    Branch,
    Jump,
    NoOperand,
    Unknown,
}

impl Opcode {
    pub fn format(self) -> InstrFormat {
        match self {
            Opcode::ADD
            | Opcode::SUB
            | Opcode::XOR
            | Opcode::OR
            | Opcode::AND
            | Opcode::ASL
            | Opcode::ASR
            | Opcode::LSL
            | Opcode::LSR
            | Opcode::SLT
            | Opcode::MUL
            | Opcode::DIV
            | Opcode::MOD => InstrFormat::ThreeReg,

            Opcode::PASSNOTA
            | Opcode::PASSA
            | Opcode::NEG
            | Opcode::INC
            | Opcode::DEC
            | Opcode::LOAD => InstrFormat::TwoReg,

            Opcode::ZEROS | Opcode::JR => InstrFormat::OneReg,
            Opcode::LCH | Opcode::LCL => InstrFormat::LoadConst,
            Opcode::STORE => InstrFormat::Store,
            Opcode::BEQ | Opcode::BNE => InstrFormat::Branch,
            Opcode::JAL | Opcode::J => InstrFormat::Jump,
            Opcode::NOP | Opcode::HALT => InstrFormat::NoOperand,
        }
    }

    /// True for instructions that commit the ALU flag quartet in EX_MEM.
    ///
    /// LCH and LCL patch register constants without touching the flags, and
    /// neither do loads, stores or control flow.
    pub fn affects_flags(self) -> bool {
        match self.format() {
            InstrFormat::ThreeReg => true,
            InstrFormat::TwoReg => self != Opcode::LOAD,
            InstrFormat::OneReg => self == Opcode::ZEROS,
            _ => false,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::ADD => "ADD",
            Opcode::SUB => "SUB",
            Opcode::ZEROS => "ZEROS",
            Opcode::XOR => "XOR",
            Opcode::OR => "OR",
            Opcode::PASSNOTA => "PASSNOTA",
            Opcode::AND => "AND",
            Opcode::ASL => "ASL",
            Opcode::ASR => "ASR",
            Opcode::LSL => "LSL",
            Opcode::LSR => "LSR",
            Opcode::PASSA => "PASSA",
            Opcode::LCH => "LCH",
            Opcode::LCL => "LCL",
            Opcode::LOAD => "LOAD",
            Opcode::STORE => "STORE",
            Opcode::JAL => "JAL",
            Opcode::JR => "JR",
            Opcode::BEQ => "BEQ",
            Opcode::BNE => "BNE",
            Opcode::J => "J",
            Opcode::SLT => "SLT",
            Opcode::MUL => "MUL",
            Opcode::DIV => "DIV",
            Opcode::MOD => "MOD",
            Opcode::NEG => "NEG",
            Opcode::INC => "INC",
            Opcode::DEC => "DEC",
            Opcode::NOP => "NOP",
            Opcode::HALT => "HALT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOpcodeError {
    pub value: String,
}

impl fmt::Display for ParseOpcodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown instruction: {}", &self.value)
    }
}

impl StdError for ParseOpcodeError {}

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    /// Parses an upper-case mnemonic. `NOT` is an alias of `PASSNOTA`.
    fn from_str(s: &str) -> Result<Opcode, ParseOpcodeError> {
        match s {
            "ADD" => Ok(Opcode::ADD),
            "SUB" => Ok(Opcode::SUB),
            "ZEROS" => Ok(Opcode::ZEROS),
            "XOR" => Ok(Opcode::XOR),
            "OR" => Ok(Opcode::OR),
            "PASSNOTA" | "NOT" => Ok(Opcode::PASSNOTA),
            "AND" => Ok(Opcode::AND),
            "ASL" => Ok(Opcode::ASL),
            "ASR" => Ok(Opcode::ASR),
            "LSL" => Ok(Opcode::LSL),
            "LSR" => Ok(Opcode::LSR),
            "PASSA" => Ok(Opcode::PASSA),
            "LCH" => Ok(Opcode::LCH),
            "LCL" => Ok(Opcode::LCL),
            "LOAD" => Ok(Opcode::LOAD),
            "STORE" => Ok(Opcode::STORE),
            "JAL" => Ok(Opcode::JAL),
            "JR" => Ok(Opcode::JR),
            "BEQ" => Ok(Opcode::BEQ),
            "BNE" => Ok(Opcode::BNE),
            "J" => Ok(Opcode::J),
            "SLT" => Ok(Opcode::SLT),
            "MUL" => Ok(Opcode::MUL),
            "DIV" => Ok(Opcode::DIV),
            "MOD" => Ok(Opcode::MOD),
            "NEG" => Ok(Opcode::NEG),
            "INC" => Ok(Opcode::INC),
            "DEC" => Ok(Opcode::DEC),
            "NOP" => Ok(Opcode::NOP),
            "HALT" => Ok(Opcode::HALT),
            _ => Err(ParseOpcodeError {
                value: s.to_string(),
            }),
        }
    }
}

#[inline]
fn opcode_to_u32(oc: Opcode) -> u32 {
    oc.to_u32().unwrap()
}

/// Masks a raw register field down to a register-file index.
#[inline]
pub fn register_index(field: u8) -> usize {
    (field & constants::REGISTER_INDEX_MASK) as usize
}

/// Constructs a register-form instruction (3reg, 2reg, 1reg and store all
/// share this layout; unused fields are zero).
#[inline]
pub fn make_reg_instruction(oc: Opcode, ra: u8, rb: u8, rc: u8) -> Word {
    if oc == Opcode::HALT {
        return constants::HALT_WORD;
    }
    (opcode_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK
        | (Word::from(ra) << constants::RA_OFFSET) & constants::RA_MASK
        | (Word::from(rb) << constants::RB_OFFSET) & constants::RB_MASK
        | (Word::from(rc) << constants::RC_OFFSET) & constants::RC_MASK
}

/// Constructs an LCH/LCL instruction.
#[inline]
pub fn make_lconst_instruction(oc: Opcode, const16: u16, rc: u8) -> Word {
    (opcode_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK
        | (Word::from(const16) << constants::CONST16_OFFSET) & constants::CONST16_MASK
        | (Word::from(rc) << constants::RC_OFFSET) & constants::RC_MASK
}

/// Constructs a BEQ/BNE instruction.
#[inline]
pub fn make_branch_instruction(oc: Opcode, ra: u8, rb: u8, offset: u8) -> Word {
    (opcode_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK
        | (Word::from(ra) << constants::RA_OFFSET) & constants::RA_MASK
        | (Word::from(rb) << constants::RB_OFFSET) & constants::RB_MASK
        | (Word::from(offset) << constants::BRANCH_OFFSET_OFFSET) & constants::BRANCH_OFFSET_MASK
}

/// Constructs a JAL/J instruction.
#[inline]
pub fn make_jump_instruction(oc: Opcode, address: u32) -> Word {
    (opcode_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK
        | (address << constants::ADDRESS24_OFFSET) & constants::ADDRESS24_MASK
}

/// Constructs a register-form instruction. `rc` comes first, mirroring the
/// assembly operand order.
#[macro_export]
macro_rules! instr_reg {
    ($opcode:ident, $rc:expr, $ra:expr, $rb:expr) => {
        $crate::make_reg_instruction($crate::Opcode::$opcode, $ra, $rb, $rc)
    };
    ($opcode:ident, $rc:expr, $ra:expr) => {
        $crate::make_reg_instruction($crate::Opcode::$opcode, $ra, 0, $rc)
    };
    ($opcode:ident, $rc:expr) => {
        $crate::make_reg_instruction($crate::Opcode::$opcode, 0, 0, $rc)
    };
}

/// Constructs an LCH/LCL instruction.
#[macro_export]
macro_rules! instr_lconst {
    ($opcode:ident, $rc:expr, $const16:expr) => {
        $crate::make_lconst_instruction($crate::Opcode::$opcode, $const16, $rc)
    };
}

/// Constructs a BEQ/BNE instruction.
#[macro_export]
macro_rules! instr_branch {
    ($opcode:ident, $ra:expr, $rb:expr, $offset:expr) => {
        $crate::make_branch_instruction($crate::Opcode::$opcode, $ra, $rb, $offset)
    };
}

/// Constructs a JAL/J instruction.
#[macro_export]
macro_rules! instr_jump {
    ($opcode:ident, $addr:expr) => {
        $crate::make_jump_instruction($crate::Opcode::$opcode, $addr)
    };
}

/// Constructs a NOP instruction.
#[macro_export]
macro_rules! nop {
    () => {
        $crate::make_reg_instruction($crate::Opcode::NOP, 0, 0, 0)
    };
}

/// The HALT word.
#[macro_export]
macro_rules! halt {
    () => {
        $crate::constants::HALT_WORD
    };
}
