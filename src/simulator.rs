//! Four-stage pipeline scheduler. Each instruction occupies its stages
//! IF, ID, EX_MEM and WB strictly in sequence, one stage per clock cycle,
//! so CPI is exactly 4 and no instruction overlaps another.

use crate::{
    alu, control, AluResult, CpuSnapshot, CpuState, DecodedInstruction, Memory, Opcode,
    Word,
};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Fetch,
    Decode,
    ExecuteMemory,
    WriteBack,
}

impl Stage {
    fn next(self) -> Stage {
        match self {
            Stage::Fetch => Stage::Decode,
            Stage::Decode => Stage::ExecuteMemory,
            Stage::ExecuteMemory => Stage::WriteBack,
            Stage::WriteBack => Stage::Fetch,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Stage::Fetch => "IF",
            Stage::Decode => "ID",
            Stage::ExecuteMemory => "EX_MEM",
            Stage::WriteBack => "WB",
        })
    }
}

/// Totals reported when the run loop ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub instructions: u64,
    pub halted: bool,
}

impl RunSummary {
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions as f64
        }
    }
}

/// The simulator owns the complete machine: CPU state, memory and the
/// inter-stage registers of the pipeline. One call to
/// [`execute_cycle`](#method.execute_cycle) performs exactly one stage as a
/// single atomic mutation of CPU and memory.
pub struct Simulator {
    cpu: CpuState,
    memory: Memory,
    stage: Stage,
    halted: bool,
    cycles: u64,
    instructions: u64,
    verbose: bool,

    // Inter-stage registers
    decoded: DecodedInstruction,
    val_a: Word,
    val_b: Word,
    val_c: Word,
    write_enable: bool,
    alu_result: Word,
    mem_data: Word,
    halt_pending: bool,
}

impl Simulator {
    pub fn new(memory: Memory) -> Simulator {
        Simulator {
            cpu: CpuState::new(),
            memory,
            stage: Stage::Fetch,
            halted: false,
            cycles: 0,
            instructions: 0,
            verbose: false,
            decoded: DecodedInstruction::decode(0),
            val_a: 0,
            val_b: 0,
            val_c: 0,
            write_enable: false,
            alu_result: 0,
            mem_data: 0,
            halt_pending: false,
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn cpu(&self) -> &CpuState {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuState {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Executes one clock cycle (one stage). Returns `false` once the
    /// machine has halted.
    pub fn execute_cycle(&mut self) -> bool {
        if self.halted {
            return false;
        }

        let before = self.cpu.snapshot();
        let stage = self.stage;

        match stage {
            Stage::Fetch => self.stage_fetch(),
            Stage::Decode => self.stage_decode(),
            Stage::ExecuteMemory => self.stage_execute_memory(),
            Stage::WriteBack => self.stage_write_back(),
        }

        if self.verbose {
            self.print_cycle(stage, &before);
        }

        if stage == Stage::WriteBack {
            self.instructions += 1;
        }
        self.stage = stage.next();
        self.cycles += 1;

        true
    }

    /// IF: load IR from memory at PC, then increment PC.
    fn stage_fetch(&mut self) {
        let instruction = self.memory.read(self.cpu.pc());
        self.cpu.set_ir(instruction);
        self.cpu.increment_pc();
    }

    /// ID: decode IR and read the register operands. No CPU state changes.
    fn stage_decode(&mut self) {
        self.decoded = DecodedInstruction::decode(self.cpu.ir());
        self.val_a = self.cpu.read(self.decoded.ra);
        self.val_b = self.cpu.read(self.decoded.rb);
        self.val_c = self.cpu.read(self.decoded.rc);
    }

    /// EX_MEM: dispatch on the opcode. Flag-affecting instructions commit
    /// the ALU's flag quartet here, not in WB.
    fn stage_execute_memory(&mut self) {
        self.write_enable = false;
        self.alu_result = 0;
        self.halt_pending = false;

        let opcode = match self.decoded.opcode {
            Some(opcode) => opcode,
            None => {
                eprintln!(
                    "ERROR: invalid opcode 0x{:02x} (instruction 0x{:08x} at address {})",
                    self.decoded.opcode_value,
                    self.cpu.ir(),
                    self.cpu.pc().wrapping_sub(1)
                );
                self.halted = true;
                return;
            }
        };

        match opcode {
            Opcode::ADD => self.execute_alu(alu::add(self.val_a, self.val_b)),
            Opcode::SUB => self.execute_alu(alu::sub(self.val_a, self.val_b)),
            Opcode::ZEROS => self.execute_alu(alu::zeros()),
            Opcode::XOR => self.execute_alu(alu::xor(self.val_a, self.val_b)),
            Opcode::OR => self.execute_alu(alu::or(self.val_a, self.val_b)),
            Opcode::PASSNOTA => self.execute_alu(alu::not(self.val_a)),
            Opcode::AND => self.execute_alu(alu::and(self.val_a, self.val_b)),
            Opcode::ASL => self.execute_alu(alu::asl(self.val_a, self.val_b)),
            Opcode::ASR => self.execute_alu(alu::asr(self.val_a, self.val_b)),
            Opcode::LSL => self.execute_alu(alu::lsl(self.val_a, self.val_b)),
            Opcode::LSR => self.execute_alu(alu::lsr(self.val_a, self.val_b)),
            Opcode::PASSA => self.execute_alu(alu::pass(self.val_a)),
            Opcode::SLT => self.execute_alu(alu::slt(self.val_a, self.val_b)),
            Opcode::MUL => self.execute_alu(alu::mul(self.val_a, self.val_b)),
            Opcode::NEG => self.execute_alu(alu::neg(self.val_a)),
            Opcode::INC => self.execute_alu(alu::inc(self.val_a)),
            Opcode::DEC => self.execute_alu(alu::dec(self.val_a)),

            Opcode::DIV => {
                let result = alu::div(self.val_a, self.val_b)
                    .unwrap_or_else(|| self.divide_by_zero(opcode));
                self.execute_alu(result);
            }
            Opcode::MOD => {
                let result = alu::modulo(self.val_a, self.val_b)
                    .unwrap_or_else(|| self.divide_by_zero(opcode));
                self.execute_alu(result);
            }

            Opcode::LCH => {
                self.alu_result = alu::load_const_high(self.val_c, self.decoded.const16);
                self.write_enable = true;
            }
            Opcode::LCL => {
                self.alu_result = alu::load_const_low(self.val_c, self.decoded.const16);
                self.write_enable = true;
            }

            Opcode::LOAD => {
                self.mem_data = self.memory.read(self.val_a);
                self.write_enable = true;
            }
            Opcode::STORE => {
                self.memory.write(self.val_c, self.val_a);
            }

            Opcode::JAL => control::jal(&mut self.cpu, self.decoded.address),
            Opcode::JR => control::jr(&mut self.cpu, self.val_c),
            Opcode::BEQ => {
                control::beq(
                    &mut self.cpu,
                    self.val_a,
                    self.val_b,
                    self.decoded.branch_offset,
                );
            }
            Opcode::BNE => {
                control::bne(
                    &mut self.cpu,
                    self.val_a,
                    self.val_b,
                    self.decoded.branch_offset,
                );
            }
            Opcode::J => control::jump(&mut self.cpu, self.decoded.address),

            Opcode::NOP => {}
            Opcode::HALT => self.halt_pending = true,
        }
    }

    /// Routes an ALU result into the write-back registers. Every operation
    /// that goes through the ALU is flag-affecting, so the flags are
    /// committed to the CPU here in EX_MEM.
    fn execute_alu(&mut self, result: AluResult) {
        self.alu_result = result.value;
        self.write_enable = true;
        self.cpu.set_flags(result.flags);
    }

    /// The defined recovery for a zero divisor: warn and yield zero with
    /// only the zero flag set.
    fn divide_by_zero(&self, opcode: Opcode) -> AluResult {
        eprintln!(
            "WARNING: {} by zero at address {}, result forced to 0",
            if opcode == Opcode::DIV {
                "division"
            } else {
                "modulo"
            },
            self.cpu.pc().wrapping_sub(1)
        );
        alu::zeros()
    }

    /// WB: write the memory word (LOAD) or the ALU result into Rc, unless
    /// write-back is disabled or Rc is the zero sink.
    fn stage_write_back(&mut self) {
        if self.write_enable && crate::register_index(self.decoded.rc) != 0 {
            let value = if self.decoded.opcode == Some(Opcode::LOAD) {
                self.mem_data
            } else {
                self.alu_result
            };
            self.cpu.write(self.decoded.rc, value);
        }

        if self.halt_pending {
            self.halted = true;
        }
    }

    /// Runs cycles until HALT or until the budget is exhausted, then prints
    /// and returns the summary.
    pub fn run(&mut self, max_cycles: u64) -> RunSummary {
        self.halted = false;
        self.cycles = 0;
        self.instructions = 0;
        self.stage = Stage::Fetch;

        while self.cycles < max_cycles {
            if !self.execute_cycle() {
                break;
            }
        }

        let summary = RunSummary {
            cycles: self.cycles,
            instructions: self.instructions,
            halted: self.halted,
        };

        println!("Cycles: {}", summary.cycles);
        println!("Instructions: {}", summary.instructions);
        if summary.instructions > 0 {
            println!("CPI: {:.2}", summary.cpi());
        } else {
            println!("CPI: n/a");
        }

        summary
    }

    fn print_cycle(&self, stage: Stage, before: &CpuSnapshot) {
        println!(
            "cycle {:<6} {:6} instruction #{}",
            self.cycles + 1,
            stage,
            self.instructions + 1
        );

        if stage == Stage::Decode {
            println!("  {}", self.decoded);
        }

        let diff = self.cpu.diff(before);
        if diff.is_empty() {
            println!("  (no state changes)");
        } else {
            for line in diff.to_string().lines() {
                println!("  {}", line);
            }
        }
    }
}
