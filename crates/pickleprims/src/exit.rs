use std::fmt;
use std::io;

use pickleprims_codec::{CodecError, ErrorKind};

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound | io::ErrorKind::BrokenPipe => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err.kind() {
        ErrorKind::Io => match err {
            CodecError::Io(source) => io_error(context, source),
            other => CliError::new(INTERNAL, format!("{context}: {other}")),
        },
        ErrorKind::EndOfInput
        | ErrorKind::InvalidEncoding
        | ErrorKind::InvalidEscape
        | ErrorKind::LimitExceeded => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickleprims_codec::EscapeFault;

    #[test]
    fn decode_failures_are_data_invalid() {
        let err = codec_error(
            "decode failed",
            CodecError::InvalidLength {
                target: "int",
                len: 3,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.to_string(),
            "decode failed: invalid amount of bytes to convert to int: 3"
        );

        let err = codec_error(
            "unescape failed",
            CodecError::InvalidEscape {
                position: 0,
                fault: EscapeFault::Truncated,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn source_io_failures_map_by_io_kind() {
        let err = codec_error(
            "read failed",
            CodecError::Io(io::Error::from(io::ErrorKind::PermissionDenied)),
        );
        assert_eq!(err.code, PERMISSION_DENIED);

        let err = io_error("open failed", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, FAILURE);
    }
}
