#[macro_use]
extern crate clap;

use clap::Arg;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
enum Error {
    Read(std::io::Error, PathBuf),
    Write(std::io::Error, PathBuf),
    Assemble(uasm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(err, path) => {
                write!(f, "reading input file \"{}\" failed: {}", path.display(), err)
            }
            Error::Write(err, path) => {
                write!(f, "writing output file \"{}\" failed: {}", path.display(), err)
            }
            Error::Assemble(err) => {
                writeln!(f, "assembly failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("The assembly source file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("The machine code listing to write")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("OUTPUT").unwrap();

    if let Err(err) = assemble_file(input, output) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}

fn assemble_file(input: &str, output: &str) -> Result<(), Error> {
    let source =
        fs::read_to_string(input).map_err(|err| Error::Read(err, PathBuf::from(input)))?;

    println!("Assembling '{}'...", input);

    let (listing, summary) =
        uasm::assemble(&source).map_err(|err| Error::Assemble(err.with_path(input)))?;

    ulist::write_file(output, &listing)
        .map_err(|err| Error::Write(err, PathBuf::from(output)))?;

    println!("Output written to '{}'", output);
    println!("Instructions: {}", summary.instructions);
    println!("Labels: {}", summary.labels.len());
    if !summary.labels.is_empty() {
        println!("Label names: {}", summary.labels.join(", "));
    }

    Ok(())
}
