use thiserror::Error;

/// Every failure mode the codec core can report. Printed verbatim (kind name
/// plus message) by the CLI on a non-zero exit.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("NotAWav: {0}")]
    NotAWav(String),

    #[error("UnsupportedFormat: {0}")]
    UnsupportedFormat(String),

    #[error("CapacityExceeded: need {needed} bits, carrier holds {available}")]
    CapacityExceeded { needed: usize, available: usize },

    #[error("Truncated: expected {expected} bytes, carrier yielded {available}")]
    Truncated { expected: usize, available: usize },

    #[error("CorruptFrame: {0}")]
    CorruptFrame(String),

    #[error("DecryptFailure: {0}")]
    DecryptFailure(String),

    #[error("Io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
