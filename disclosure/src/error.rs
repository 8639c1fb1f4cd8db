//! Error types for decoding and encoding disclosed data.

use thiserror::Error;

use crate::layout::{FieldId, LayoutVersion};

/// Errors that can occur while decoding or encoding a disclosure record.
#[derive(Debug, Error)]
pub enum Error {
    // Input errors
    #[error("public inputs: {0}")]
    PublicInputs(#[from] inputs::error::Error),
    #[error("raw record: expected {expected} bytes, got {actual}")]
    RawLength { expected: usize, actual: usize },

    // Text errors
    #[error("{field}: invalid UTF-8 text")]
    InvalidText { field: FieldId },

    // Date errors
    #[error("date: expected 6 characters (YYMMDD), got '{0}'")]
    DateLength(String),
    #[error("date: non-numeric component in '{0}'")]
    DateNotNumeric(String),
    #[error("date: month {0} out of range (must be 1-12)")]
    DateMonthOutOfRange(u32),
    #[error("date: day {0} out of range (must be 1-31)")]
    DateDayOutOfRange(u32),
    #[error("date: reference year {0} cannot resolve a two-digit year")]
    ReferenceYearOutOfRange(i32),
    #[error("date: {year:04}-{month:02}-{day:02} cannot be represented")]
    DateOutOfRange { year: i32, month: u32, day: u32 },
    #[error("{field}: {source}")]
    Field {
        field: FieldId,
        #[source]
        source: Box<Error>,
    },

    // Encode errors
    #[error("{field}: value is {actual} bytes, field holds {width}")]
    FieldTooLong {
        field: FieldId,
        width: usize,
        actual: usize,
    },
    #[error("{0}: not part of this layout")]
    FieldNotInLayout(FieldId),

    // Layout errors
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown MRZ format '{0}' (expected passport or id_card)")]
    UnknownMrzFormat(String),
    #[error("unknown layout version {0}")]
    UnknownLayoutVersion(u8),
    #[error("layout mismatch: expected {expected}, got {actual}")]
    LayoutMismatch {
        expected: LayoutVersion,
        actual: LayoutVersion,
    },
}
