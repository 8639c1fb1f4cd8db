//! Public-input sequences of a zero-knowledge proof.
//!
//! A proof exposes its public inputs as an ordered list of field elements,
//! usually written as hex strings (`"0x00…3c"`). Some of them carry a single
//! byte each. This crate turns such a list into bytes and back, without
//! knowing what the bytes mean.

pub mod error;
mod proof;

use std::ops::Range;

use error::Error;
use mrzpack::decoder::{DecodableFrom, Decoder};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::hex_digit1,
    combinator::{all_consuming, opt},
    sequence::preceded,
};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

pub use proof::{ProofData, ProofDocument};

/// Number of hex digits in a 32-byte field element.
const FIELD_ELEMENT_HEX_DIGITS: usize = 64;

/// A single public input.
///
/// JSON numbers are read as decimal integers. Strings are always hex,
/// with or without a `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicInput {
    Integer(i64),
    Hex(String),
}

impl PublicInput {
    /// Writes a byte as a 32-byte field element (`0x` + 64 hex digits).
    pub fn from_byte(byte: u8) -> Self {
        PublicInput::Hex(format!(
            "0x{:0width$x}",
            byte,
            width = FIELD_ELEMENT_HEX_DIGITS
        ))
    }

    /// Reads the entry as a byte value in `0..=255`.
    pub fn to_byte(&self) -> Result<u8, Error> {
        match self {
            PublicInput::Integer(n) => {
                u8::try_from(*n).map_err(|_| Error::OutOfRange(n.to_string()))
            }
            PublicInput::Hex(s) => parse_hex_byte(s),
        }
    }
}

impl From<u8> for PublicInput {
    fn from(byte: u8) -> Self {
        PublicInput::from_byte(byte)
    }
}

impl From<&str> for PublicInput {
    fn from(s: &str) -> Self {
        PublicInput::Hex(s.to_string())
    }
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(opt(alt((tag("0x"), tag("0X")))), hex_digit1)).parse(input)
}

fn parse_hex_byte(s: &str) -> Result<u8, Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyEntry);
    }
    let (_, digits) = hex_digits(trimmed).map_err(|_| Error::InvalidHex(s.to_string()))?;
    // Field elements are 64 digits wide, so parse without a size limit and
    // range-check afterwards.
    let value = BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidHex(s.to_string()))?;
    value.to_u8().ok_or_else(|| Error::OutOfRange(s.to_string()))
}

/// An ordered sequence of public inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicInputs {
    entries: Vec<PublicInput>,
}

impl PublicInputs {
    pub fn new(entries: Vec<PublicInput>) -> Self {
        PublicInputs { entries }
    }

    /// One field-element entry per byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().copied().map(PublicInput::from_byte).collect()
    }

    pub fn entries(&self) -> &[PublicInput] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn require_len(&self, required: usize) -> Result<(), Error> {
        if self.entries.len() < required {
            return Err(Error::TooShort {
                required,
                actual: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Reads the entries in `range` as bytes.
    ///
    /// Fails if the sequence is shorter than `range.end` or if any entry in
    /// the range is not a byte. Entries outside the range are not looked at.
    pub fn window(&self, range: Range<usize>) -> Result<Vec<u8>, Error> {
        self.require_len(range.end)?;
        let start = range.start;
        self.entries[range]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.to_byte().map_err(|e| Error::Entry {
                    index: start + i,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    /// Overwrites the entries starting at `offset` with `bytes`.
    pub fn splice(&mut self, offset: usize, bytes: &[u8]) -> Result<(), Error> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|end| *end <= self.entries.len())
            .ok_or(Error::SpliceOutOfBounds {
                offset,
                len: bytes.len(),
                actual: self.entries.len(),
            })?;
        for (entry, byte) in self.entries[offset..end].iter_mut().zip(bytes) {
            *entry = PublicInput::from_byte(*byte);
        }
        tracing::debug!(offset, len = bytes.len(), "spliced bytes into public inputs");
        Ok(())
    }
}

impl FromIterator<PublicInput> for PublicInputs {
    fn from_iter<I: IntoIterator<Item = PublicInput>>(iter: I) -> Self {
        PublicInputs {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PublicInput>> for PublicInputs {
    fn from(entries: Vec<PublicInput>) -> Self {
        PublicInputs { entries }
    }
}

impl DecodableFrom<PublicInputs> for Vec<u8> {}

impl Decoder<PublicInputs, Vec<u8>> for PublicInputs {
    type Error = Error;

    /// Reads every entry as a byte.
    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        self.window(0..self.entries.len())
    }
}
