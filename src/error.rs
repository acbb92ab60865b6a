//! Error types shared by every stage of the Huffman pipeline.

use thiserror::Error;

/// Result type for Huffman coding operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source text is empty")]
    EmptyInput,

    #[error("character {0:?} is outside the ASCII alphabet")]
    UnsupportedCharacter(char),

    #[error("a Huffman tree needs at least two frequency entries, got {0}")]
    TooFewEntries(usize),

    #[error("invalid character {0:?} in bit sequence")]
    InvalidBit(char),

    #[error("no code for character {0:?}")]
    MissingCode(char),

    #[error("encoded stream is empty")]
    EmptyStream,

    #[error("no padding sentinel in the first byte of the encoded stream")]
    MissingSentinel,

    #[error("bit sequence ends in the middle of a code")]
    IncompleteCode,

    #[error("{0} has not been run yet")]
    NotReady(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::InvalidBit('2').to_string(),
            "invalid character '2' in bit sequence"
        );
        assert_eq!(
            Error::NotReady("make_tree").to_string(),
            "make_tree has not been run yet"
        );
    }
}
