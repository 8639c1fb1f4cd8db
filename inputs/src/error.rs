use thiserror::Error;

/// Errors that can occur when reading or writing public inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry was an empty string
    #[error("empty entry")]
    EmptyEntry,

    /// An entry is not a hex string (optional `0x` prefix, then hex digits)
    #[error("invalid hex string '{0}'")]
    InvalidHex(String),

    /// An entry parsed but does not fit in a byte
    #[error("value {0} out of range (must be 0-255)")]
    OutOfRange(String),

    /// An entry error, with the position of the entry in the sequence
    #[error("public input #{index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("need at least {required} public inputs, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("cannot splice {len} bytes at offset {offset} into {actual} public inputs")]
    SpliceOutOfBounds {
        offset: usize,
        len: usize,
        actual: usize,
    },

    #[error("proof JSON has no publicInputs array")]
    MissingPublicInputs,

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}
