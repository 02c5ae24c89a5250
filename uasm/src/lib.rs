//! Assembler for the UFLA-RISC processor.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which takes a
//! program written in the UFLA-RISC assembly language and produces the
//! machine code [`Listing`](../ulist/struct.Listing.html) the simulator
//! loads, together with a short [`AssemblySummary`](struct.AssemblySummary.html).
//!
//! Parsing is implemented with [pest]; the crate's [`Error`](type.Error.html)
//! type is an alias of `pest::error::Error`, so every error renders with the
//! source line and a marker under the offending text.
//!
//! # Assembly language
//!
//! One statement per line. `#` and `;` start comments, commas count as
//! whitespace.
//!
//! - `address <literal>` places the following instructions at the given
//!   memory address (decimal, `0x…` or `0b…`; a bare string of binary
//!   digits with a leading zero is read as base 2).
//! - `name:` binds a label to the current address; `name: instr …` does the
//!   same and then assembles the instruction.
//! - Registers are written `r0` … `r31`, case-insensitively.
//! - Number literals are decimal, `0x…` or `0b…`, with an optional sign.
//! - Branch and jump targets are numbers or label names.
//!
//! Mnemonics, one instruction per line, destination register first:
//!
//! Mnemonic   | Syntax              | Effect
//! -----------|---------------------|---------------------------------
//! `add`      | `add rc, ra, rb`    | `rc = ra + rb`
//! `sub`      | `sub rc, ra, rb`    | `rc = ra - rb`
//! `zeros`    | `zeros rc`          | `rc = 0`
//! `xor`      | `xor rc, ra, rb`    | `rc = ra ^ rb`
//! `or`       | `or rc, ra, rb`     | `rc = ra | rb`
//! `passnota` | `passnota rc, ra`   | `rc = ~ra` (alias `not`)
//! `and`      | `and rc, ra, rb`    | `rc = ra & rb`
//! `asl`      | `asl rc, ra, rb`    | `rc = ra << rb`
//! `asr`      | `asr rc, ra, rb`    | `rc = ra >> rb` (sign extending)
//! `lsl`      | `lsl rc, ra, rb`    | `rc = ra << rb`
//! `lsr`      | `lsr rc, ra, rb`    | `rc = ra >> rb` (zero filling)
//! `passa`    | `passa rc, ra`      | `rc = ra`
//! `lch`      | `lch rc, const16`   | high half of `rc` = `const16`
//! `lcl`      | `lcl rc, const16`   | low half of `rc` = `const16`
//! `load`     | `load rc, ra`       | `rc = mem[ra]`
//! `store`    | `store rc, ra`      | `mem[rc] = ra`
//! `jal`      | `jal target`        | `r31 = pc`, jump to `target`
//! `jr`       | `jr rc`             | jump to the address in `rc`
//! `beq`      | `beq ra, rb, target`| branch to `target` if `ra == rb`
//! `bne`      | `bne ra, rb, target`| branch to `target` if `ra != rb`
//! `j`        | `j target`          | jump to `target`
//! `slt`      | `slt rc, ra, rb`    | `rc = (ra < rb) ? 1 : 0`
//! `mul`      | `mul rc, ra, rb`    | `rc = ra * rb`
//! `div`      | `div rc, ra, rb`    | `rc = ra / rb`
//! `mod`      | `mod rc, ra, rb`    | `rc = ra mod rb`
//! `neg`      | `neg rc, ra`        | `rc = -ra`
//! `inc`      | `inc rc, ra`        | `rc = ra + 1`
//! `dec`      | `dec rc, ra`        | `rc = ra - 1`
//! `nop`      | `nop`               | does nothing
//! `halt`     | `halt`              | stops the machine
//!
//! [pest]: https://docs.rs/pest/

mod encode;
mod instructions;
mod operands;
mod parser;


use parser::{AsmParser, Rule};
use pest::iterators::Pair;
use pest::{Parser, Span};
use ulist::Listing;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Counters reported after a successful assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblySummary {
    pub instructions: usize,
    pub labels: Vec<String>,
}

pub fn assemble(input: &str) -> Result<(Listing, AssemblySummary)> {
    let program = parse(input)?;
    let (parsed, labels) = instructions::process_program(program)?;
    let encoded = encode::encode_instructions(&parsed, &labels)?;

    let mut listing = Listing::new();
    for (address, word) in &encoded {
        listing.push((address & 0xFFFF) as u16, *word);
    }

    let mut label_names: Vec<String> = labels.keys().map(|name| name.to_string()).collect();
    label_names.sort();

    Ok((
        listing,
        AssemblySummary {
            instructions: encoded.len(),
            labels: label_names,
        },
    ))
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(AsmParser::parse(Rule::program, input)?.next().unwrap())
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}
