use std::fs::File;
use std::io::Read;

use pickleprims_codec::{bytes_from_raw_string, CodecError, ReaderConfig, StreamReader};
use tracing::{debug, info};

use crate::cmd::LinesArgs;
use crate::exit::{codec_error, io_error, CliResult, SUCCESS};
use crate::output::{print_lines, OutputFormat};

pub fn run(args: LinesArgs, format: OutputFormat) -> CliResult<i32> {
    let source: Box<dyn Read> = match &args.file {
        Some(path) => Box::new(
            File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?,
        ),
        None => Box::new(std::io::stdin().lock()),
    };

    let config = ReaderConfig {
        max_line_length: args.max_line_length,
        ..ReaderConfig::default()
    };
    let lines = read_all_lines(StreamReader::with_config(source, config), args.keep_newline)?;
    info!(count = lines.len(), "read lines");

    let raw = raw_lines(&lines, args.keep_newline)?;
    print_lines(&lines, &raw, format);

    Ok(SUCCESS)
}

/// Narrow each line back to its bytes for raw output.
///
/// Stripped lines get a `\n` appended so line boundaries survive; a final
/// line that had no terminator in the input gains one.
fn raw_lines(lines: &[String], terminated: bool) -> CliResult<Vec<Vec<u8>>> {
    lines
        .iter()
        .map(|line| {
            let mut bytes =
                bytes_from_raw_string(line).map_err(|err| codec_error("encode failed", err))?;
            if !terminated {
                bytes.push(b'\n');
            }
            Ok(bytes)
        })
        .collect()
}

fn read_all_lines<R: Read>(
    mut reader: StreamReader<R>,
    include_terminator: bool,
) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        match reader.read_line(include_terminator) {
            Ok(line) => lines.push(line),
            Err(CodecError::EndOfInput) => {
                debug!("end of input");
                return Ok(lines);
            }
            Err(err) => {
                return Err(codec_error(
                    &format!("failed reading line {}", lines.len() + 1),
                    err,
                ))
            }
        }
    }
}
