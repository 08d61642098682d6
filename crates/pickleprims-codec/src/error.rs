/// Errors that can occur while reading or converting wire primitives.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The source ended before a line produced a single byte.
    #[error("premature end of input")]
    EndOfInput,

    /// The source ended partway through a fixed-count read.
    #[error("expected {missing} more bytes in input stream (wanted {wanted})")]
    Truncated { wanted: usize, missing: usize },

    /// A byte group has a length the target decoder does not accept.
    #[error("invalid amount of bytes to convert to {target}: {len}")]
    InvalidLength { target: &'static str, len: usize },

    /// A character cannot be represented as a single raw byte.
    ///
    /// `position` is the byte offset of the character in the UTF-8 input.
    #[error("character U+{value:04X} at position {position} is above 255, cannot convert to bytes")]
    CharOutOfRange { value: u32, position: usize },

    /// An escape marker is followed by something the decoder cannot interpret.
    ///
    /// `position` is the byte offset of the `\\` that opens the faulty escape.
    #[error("invalid escape sequence at position {position}: {fault}")]
    InvalidEscape { position: usize, fault: EscapeFault },

    /// A line grew past the configured maximum.
    #[error("line too long (max {max} bytes)")]
    LineTooLong { max: usize },

    /// An I/O error occurred while reading from the source.
    #[error("codec I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What exactly was wrong with an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EscapeFault {
    /// `\` followed by a character that starts no known escape.
    #[error("unknown escape character {0:?}")]
    Unknown(char),

    /// The text ended before the escape was complete.
    #[error("escape sequence truncated at end of text")]
    Truncated,

    /// A character in a hex escape is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    BadHexDigit(char),

    /// The escape names a value that is not a Unicode scalar (e.g. a lone surrogate).
    #[error("invalid code point {0:#06x}")]
    InvalidCodePoint(u32),
}

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EndOfInput,
    InvalidEncoding,
    InvalidEscape,
    LimitExceeded,
    Io,
}

impl CodecError {
    /// Which broad kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::EndOfInput | CodecError::Truncated { .. } => ErrorKind::EndOfInput,
            CodecError::InvalidLength { .. } | CodecError::CharOutOfRange { .. } => {
                ErrorKind::InvalidEncoding
            }
            CodecError::InvalidEscape { .. } => ErrorKind::InvalidEscape,
            CodecError::LineTooLong { .. } => ErrorKind::LimitExceeded,
            CodecError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(CodecError::EndOfInput.kind(), ErrorKind::EndOfInput);
        assert_eq!(
            CodecError::Truncated {
                wanted: 4,
                missing: 1
            }
            .kind(),
            ErrorKind::EndOfInput
        );
        assert_eq!(
            CodecError::InvalidLength {
                target: "int",
                len: 3
            }
            .kind(),
            ErrorKind::InvalidEncoding
        );
        assert_eq!(
            CodecError::InvalidEscape {
                position: 0,
                fault: EscapeFault::Truncated
            }
            .kind(),
            ErrorKind::InvalidEscape
        );
        assert_eq!(
            CodecError::LineTooLong { max: 8 }.kind(),
            ErrorKind::LimitExceeded
        );
        let io = std::io::Error::other("boom");
        assert_eq!(CodecError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn messages_name_the_offending_length() {
        let err = CodecError::InvalidLength {
            target: "double",
            len: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid amount of bytes to convert to double: 7"
        );
    }

    #[test]
    fn char_out_of_range_message() {
        let err = CodecError::CharOutOfRange {
            value: 300,
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "character U+012C at position 2 is above 255, cannot convert to bytes"
        );
    }
}
