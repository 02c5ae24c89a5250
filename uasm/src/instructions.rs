use crate::operands::{check_range, parse_number};
use crate::{new_parser_error, Result, Rule};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;
use std::collections::HashMap;
use ucpu::{constants, Opcode};

pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// One instruction as collected by the first pass: the opcode, the raw
/// operand tokens, and the address the instruction will occupy. The second
/// pass (the encoder) consumes these records once the label map is
/// complete, so forward references resolve.
#[derive(Debug)]
pub struct ParsedInstruction<'i> {
    pub opcode: Opcode,
    pub args: Vec<Pair<'i, Rule>>,
    pub address: u32,
    pub span: Span<'i>,
}

/// First pass: walks the statements in source order, tracking the current
/// address, binding labels and collecting instruction records.
pub fn process_program(pair: Pair<Rule>) -> Result<(Vec<ParsedInstruction>, LabelMap)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = LabelMap::new();
    let mut current_address = 0u32;

    for statement in pair.into_inner() {
        match statement.as_rule() {
            Rule::EOI => {}
            Rule::address_directive => {
                current_address = process_address_directive(statement)?;
            }
            Rule::label => {
                let name = statement.into_inner().next().unwrap();
                let span = name.as_span();
                let name = name.as_str();
                if labels.contains_key(name) {
                    return Err(new_parser_error(span, format!("Duplicate label: {}", name)));
                }
                labels.insert(name, current_address);
            }
            Rule::instruction => {
                process_instruction(statement, &mut instructions, current_address)?;
                current_address = current_address.wrapping_add(1);
            }
            _ => unreachable!(),
        }
    }

    Ok((instructions, labels))
}

fn process_address_directive(pair: Pair<Rule>) -> Result<u32> {
    debug_assert_matches!(pair.as_rule(), Rule::address_directive);

    // Skip the keyword pair; the argument token follows it.
    let argument = pair.into_inner().last().unwrap();

    // A general number literal first; failing that, a bare base-2 literal.
    let value = match parse_number(argument.as_str()) {
        Some(value) => value,
        None => i64::from_str_radix(argument.as_str(), 2).map_err(|_| {
            new_parser_error(
                argument.as_span(),
                format!("Invalid address: {}", argument.as_str()),
            )
        })?,
    };

    check_range(&argument, value, constants::MAX_LOAD_ADDRESS, "Address")?;

    Ok(value as u32)
}

fn process_instruction<'i>(
    pair: Pair<'i, Rule>,
    instructions: &mut Vec<ParsedInstruction<'i>>,
    address: u32,
) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let span = pair.as_span();
    let mut tokens = pair.into_inner();
    let mnemonic = tokens.next().unwrap();

    if mnemonic.as_str().eq_ignore_ascii_case("address") {
        return Err(new_parser_error(
            mnemonic.as_span(),
            "The address directive requires an argument".to_string(),
        ));
    }

    let opcode = mnemonic
        .as_str()
        .to_uppercase()
        .parse::<Opcode>()
        .map_err(|err| new_parser_error(mnemonic.as_span(), format!("{}", err)))?;

    instructions.push(ParsedInstruction {
        opcode,
        args: tokens.collect(),
        address,
        span,
    });

    Ok(())
}
