use crate::instructions::{LabelMap, ParsedInstruction};
use crate::operands::{check_range, parse_number, parse_register, process_const};
use crate::{new_parser_error, Result, Rule};
use pest::iterators::Pair;
use ucpu::{
    constants, make_branch_instruction, make_jump_instruction, make_lconst_instruction,
    make_reg_instruction, InstrFormat, Word,
};

/// Second pass: turns every record into a machine word, resolving labels
/// against the completed label map. Extra operands beyond the ones an
/// instruction consumes are ignored.
pub fn encode_instructions(
    instructions: &[ParsedInstruction],
    labels: &LabelMap,
) -> Result<Vec<(u32, Word)>> {
    instructions
        .iter()
        .map(|instr| Ok((instr.address, encode_instruction(instr, labels)?)))
        .collect()
}

fn encode_instruction(instr: &ParsedInstruction, labels: &LabelMap) -> Result<Word> {
    let opcode = instr.opcode;

    match opcode.format() {
        InstrFormat::ThreeReg => {
            let rc = parse_register(arg(instr, 0, "3 registers")?)?;
            let ra = parse_register(arg(instr, 1, "3 registers")?)?;
            let rb = parse_register(arg(instr, 2, "3 registers")?)?;
            Ok(make_reg_instruction(opcode, ra, rb, rc))
        }

        InstrFormat::TwoReg | InstrFormat::Store => {
            let rc = parse_register(arg(instr, 0, "2 registers")?)?;
            let ra = parse_register(arg(instr, 1, "2 registers")?)?;
            Ok(make_reg_instruction(opcode, ra, 0, rc))
        }

        InstrFormat::OneReg => {
            let rc = parse_register(arg(instr, 0, "a register")?)?;
            Ok(make_reg_instruction(opcode, 0, 0, rc))
        }

        InstrFormat::LoadConst => {
            let rc = parse_register(arg(instr, 0, "a register and a constant")?)?;
            let pair = arg(instr, 1, "a register and a constant")?;
            let value = process_const(pair)?;
            check_range(pair, value, constants::MAX_CONST16, "Constant")?;
            Ok(make_lconst_instruction(opcode, value as u16, rc))
        }

        InstrFormat::Branch => {
            let ra = parse_register(arg(instr, 0, "2 registers and a target")?)?;
            let rb = parse_register(arg(instr, 1, "2 registers and a target")?)?;
            let pair = arg(instr, 2, "2 registers and a target")?;
            let target = resolve_target(pair, labels)?;
            check_range(pair, target, constants::MAX_BRANCH_OFFSET, "Branch target")?;
            Ok(make_branch_instruction(opcode, ra, rb, target as u8))
        }

        InstrFormat::Jump => {
            let pair = arg(instr, 0, "a target address")?;
            let target = resolve_target(pair, labels)?;
            check_range(pair, target, constants::MAX_JUMP_ADDRESS, "Jump target")?;
            Ok(make_jump_instruction(opcode, target as u32))
        }

        InstrFormat::NoOperand => Ok(make_reg_instruction(opcode, 0, 0, 0)),

        // The parser only produces opcodes from the ISA table.
        InstrFormat::Unknown => unreachable!(),
    }
}

fn arg<'a, 'i>(
    instr: &'a ParsedInstruction<'i>,
    index: usize,
    what: &str,
) -> Result<&'a Pair<'i, Rule>> {
    instr.args.get(index).ok_or_else(|| {
        new_parser_error(
            instr.span.clone(),
            format!("{} requires {}", instr.opcode, what),
        )
    })
}

/// A branch or jump target is a number, or failing that a label looked up
/// in the label table.
fn resolve_target(pair: &Pair<Rule>, labels: &LabelMap) -> Result<i64> {
    match parse_number(pair.as_str()) {
        Some(value) => Ok(value),
        None => labels
            .get(pair.as_str())
            .map(|address| i64::from(*address))
            .ok_or_else(|| {
                new_parser_error(
                    pair.as_span(),
                    format!("Label not found: {}", pair.as_str()),
                )
            }),
    }
}
