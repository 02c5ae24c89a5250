//! Core of the UFLA-RISC toolchain: the shared ISA definition and the
//! cycle-accurate simulator.
//!
//! The instruction encoding, the type classification and the flag-affecting
//! set hang off [`Opcode`](enum.Opcode.html) and are used by both the
//! assembler (`uasm`) and the simulator front end (`usim`). The execution
//! engine is the [`Simulator`](struct.Simulator.html), which drives a
//! [`CpuState`](struct.CpuState.html) and a [`Memory`](struct.Memory.html)
//! through the four pipeline stages IF, ID, EX_MEM and WB.

pub mod alu;
pub mod constants;
pub mod control;

mod cpu;
mod decoder;
mod instructions;
mod memory;
mod register;
mod simulator;


pub type Word = u32;

pub use crate::alu::AluResult;
pub use crate::cpu::{CpuDiff, CpuSnapshot, CpuState, Flags, RegisterChange};
pub use crate::decoder::DecodedInstruction;
pub use crate::instructions::{
    make_branch_instruction, make_jump_instruction, make_lconst_instruction,
    make_reg_instruction, register_index, InstrFormat, Opcode, ParseOpcodeError,
};
pub use crate::memory::Memory;
pub use crate::register::Register;
pub use crate::simulator::{RunSummary, Simulator, Stage};
