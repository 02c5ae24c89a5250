//! The machine code listing format shared by the assembler and the
//! simulator.
//!
//! A listing is UTF-8 text with one 32-bit instruction per line, written as
//! 32 characters from `{0, 1}`. An optional `address <bin>` directive (a
//! plain binary literal, no prefix) repositions the loader; code before the
//! first directive is placed at address 0. Blank lines and lines starting
//! with `#` are ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub type Word = u32;

const WORD_BITS: usize = 32;
const ADDRESS_BITS: usize = 16;

/// A run of words placed at consecutive addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub address: u16,
    pub words: Vec<Word>,
}

/// An ordered sequence of segments, as laid out in a listing file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    segments: Vec<Segment>,
}

impl Listing {
    pub fn new() -> Listing {
        Listing::default()
    }

    /// Appends a word at the given address, extending the last segment when
    /// the address is contiguous with it.
    pub fn push(&mut self, address: u16, word: Word) {
        if let Some(last) = self.segments.last_mut() {
            let next = last.address.wrapping_add(last.words.len() as u16);
            if next == address {
                last.words.push(word);
                return;
            }
        }

        self.segments.push(Segment {
            address,
            words: vec![word],
        });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// A line that is neither a directive, a comment nor a 32-character
    /// binary word.
    InvalidWord { line: usize, text: String },
    /// An `address` directive with a missing or non-binary argument.
    InvalidAddress { line: usize, text: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::InvalidWord { line, text } => write!(
                f,
                "line {}: expected a 32-bit binary instruction, got: {}",
                line, text
            ),
            Error::InvalidAddress { line, text } => {
                write!(f, "line {}: invalid address directive: {}", line, text)
            }
        }
    }
}

impl std::error::Error for Error {}

fn parse_binary_word(text: &str) -> Option<Word> {
    if text.len() == WORD_BITS && text.bytes().all(|b| b == b'0' || b == b'1') {
        Word::from_str_radix(text, 2).ok()
    } else {
        None
    }
}

pub fn read<R: Read>(reader: &mut R) -> Result<Listing, Error> {
    let mut listing = Listing::new();
    let mut address = 0u16;

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_number = index + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let first = parts.next().unwrap();

        if first.eq_ignore_ascii_case("address") {
            let argument = parts.next().ok_or_else(|| Error::InvalidAddress {
                line: line_number,
                text: line.to_string(),
            })?;
            let value =
                u32::from_str_radix(argument, 2).map_err(|_| Error::InvalidAddress {
                    line: line_number,
                    text: line.to_string(),
                })?;
            address = (value & 0xFFFF) as u16;
            continue;
        }

        match parse_binary_word(line) {
            Some(word) => {
                listing.push(address, word);
                address = address.wrapping_add(1);
            }
            None => {
                return Err(Error::InvalidWord {
                    line: line_number,
                    text: line.to_string(),
                })
            }
        }
    }

    Ok(listing)
}

pub fn write<W: Write>(writer: &mut W, listing: &Listing) -> io::Result<()> {
    let mut cursor = 0u32;

    for segment in listing.segments() {
        if u32::from(segment.address) != cursor {
            writeln!(
                writer,
                "address {:0width$b}",
                segment.address,
                width = ADDRESS_BITS
            )?;
        }
        for word in &segment.words {
            writeln!(writer, "{:0width$b}", word, width = WORD_BITS)?;
        }
        cursor = u32::from(segment.address) + segment.words.len() as u32;
    }

    Ok(())
}

pub trait ReadListingExt: Read + Sized {
    fn read_listing(&mut self) -> Result<Listing, Error> {
        read(self)
    }
}

impl<R: Read + Sized> ReadListingExt for R {}

pub trait WriteListingExt: Write + Sized {
    fn write_listing(&mut self, listing: &Listing) -> io::Result<()> {
        write(self, listing)
    }
}

impl<W: Write + Sized> WriteListingExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Listing, Error> {
    File::open(path)?.read_listing()
}

pub fn write_file<P: AsRef<Path>>(path: P, listing: &Listing) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_listing(listing)?;
    writer.flush()
}
