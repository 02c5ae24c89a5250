//! Loads machine code listings into the simulator and reports the final
//! machine state.

use std::fmt;
use std::path::{Path, PathBuf};

use ucpu::{constants, Memory, RunSummary, Simulator};
use ulist::Listing;

/// How many non-zero memory words the final report shows.
const MEMORY_REPORT_LIMIT: usize = 20;

#[derive(Debug)]
pub enum Error {
    Listing(ulist::Error, PathBuf),
    EmptyProgram(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Listing(err, path) => {
                write!(f, "loading program \"{}\" failed: {}", path.display(), err)
            }
            Error::EmptyProgram(path) => {
                write!(f, "no instructions loaded from \"{}\"", path.display())
            }
        }
    }
}

/// Places a listing's segments into memory. Returns the number of words
/// written.
pub fn load_listing(memory: &mut Memory, listing: &Listing) -> usize {
    for segment in listing.segments() {
        memory.write_block(u32::from(segment.address), &segment.words);
    }
    listing.word_count()
}

/// Loads the listing at `path` into a fresh machine and runs it to
/// completion.
pub fn run_file<P: AsRef<Path>>(
    path: P,
    verbose: bool,
    max_cycles: u64,
) -> Result<(Simulator, RunSummary), Error> {
    let path = path.as_ref();
    let listing =
        ulist::read_file(path).map_err(|err| Error::Listing(err, path.to_owned()))?;

    let mut memory = Memory::new();
    let count = load_listing(&mut memory, &listing);
    println!("Program loaded: {} instructions", count);

    if count == 0 {
        return Err(Error::EmptyProgram(path.to_owned()));
    }

    let mut sim = Simulator::new(memory);
    sim.set_verbose(verbose);
    let summary = sim.run(max_cycles);

    Ok((sim, summary))
}

/// Prints the non-zero registers, the flags and the first non-zero memory
/// words of a finished run.
pub fn print_final_state(sim: &Simulator) {
    println!("Registers (non-zero):");
    let mut any = false;
    for index in 0..constants::REGISTER_COUNT as u8 {
        let value = sim.cpu().read(index);
        if value != 0 {
            println!(
                "  R{:<2} 0x{:08x} (u32: {:10}, s32: {:11})",
                index,
                value,
                value,
                sim.cpu().read_signed(index)
            );
            any = true;
        }
    }
    if !any {
        println!("  (all zero)");
    }

    println!("PC: {} (0x{:04x})", sim.cpu().pc(), sim.cpu().pc());
    println!("Flags: {}", sim.cpu().flags());

    println!("Memory (non-zero, first {}):", MEMORY_REPORT_LIMIT);
    let words = sim.memory().non_zero_words();
    for (address, value) in words.iter().take(MEMORY_REPORT_LIMIT) {
        println!("  [0x{:04x}] 0x{:08x} ({})", address, value, value);
    }
    if words.len() > MEMORY_REPORT_LIMIT {
        println!("  ... ({} more)", words.len() - MEMORY_REPORT_LIMIT);
    }
}
