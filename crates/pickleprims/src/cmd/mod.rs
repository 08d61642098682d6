use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::{CliError, CliResult};
use crate::output::OutputFormat;

pub mod double;
pub mod int;
pub mod lines;
pub mod long;
pub mod unescape;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Arbitrary-precision integers (little-endian two's complement).
    Long {
        #[command(subcommand)]
        action: LongAction,
    },
    /// 2-byte unsigned / 4-byte signed little-endian integers.
    Int {
        #[command(subcommand)]
        action: IntAction,
    },
    /// 8-byte big-endian IEEE-754 doubles.
    Double {
        #[command(subcommand)]
        action: DoubleAction,
    },
    /// Decode a backslash-escaped literal.
    Unescape(UnescapeArgs),
    /// Read newline-terminated lines from a file or stdin.
    Lines(LinesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Long { action } => long::run(action, format),
        Command::Int { action } => int::run(action, format),
        Command::Double { action } => double::run(action, format),
        Command::Unescape(args) => unescape::run(args, format),
        Command::Lines(args) => lines::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Subcommand, Debug)]
pub enum LongAction {
    /// Decode hex bytes into an integer.
    Decode(HexArgs),
    /// Encode a decimal integer of any size.
    Encode(LongEncodeArgs),
}

#[derive(Subcommand, Debug)]
pub enum IntAction {
    /// Decode 2 or 4 hex bytes into an integer.
    Decode(HexArgs),
    /// Encode a signed 32-bit integer.
    Encode(IntEncodeArgs),
}

#[derive(Subcommand, Debug)]
pub enum DoubleAction {
    /// Decode 8 hex bytes into a double.
    Decode(HexArgs),
    /// Encode a double.
    Encode(DoubleEncodeArgs),
}

#[derive(Args, Debug)]
pub struct HexArgs {
    /// Bytes as hex digits, e.g. "ff00" or "0xff 00".
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct LongEncodeArgs {
    /// Decimal integer, any size.
    #[arg(allow_negative_numbers = true)]
    pub value: String,
}

#[derive(Args, Debug)]
pub struct IntEncodeArgs {
    /// Signed 32-bit integer.
    #[arg(allow_negative_numbers = true)]
    pub value: i32,
}

#[derive(Args, Debug)]
pub struct DoubleEncodeArgs {
    /// Floating point value (also accepts "NaN", "inf", "-inf").
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    pub value: f64,
}

#[derive(Args, Debug)]
pub struct UnescapeArgs {
    /// Escaped text.
    pub text: String,
    /// Decode \uHHHH escapes instead of \xHH.
    #[arg(long)]
    pub unicode: bool,
}

#[derive(Args, Debug)]
pub struct LinesArgs {
    /// File to read. Default: stdin.
    pub file: Option<PathBuf>,
    /// Keep the terminating newline on each line.
    #[arg(long)]
    pub keep_newline: bool,
    /// Fail on lines longer than N bytes.
    #[arg(long, value_name = "N")]
    pub max_line_length: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Parse hex digits into bytes. Accepts an optional `0x` prefix and whitespace.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(&cleaned).map_err(|err| CliError::usage(format!("invalid hex {input:?}: {err}")))
}
