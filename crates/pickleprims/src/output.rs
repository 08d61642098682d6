use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Result of converting one primitive.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub operation: &'static str,
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<&'static str>,
    /// Bytes written for `--format raw`; defaults to the UTF-8 of `output`.
    #[serde(skip)]
    pub raw: Option<Vec<u8>>,
}

impl Conversion {
    pub fn new(
        operation: &'static str,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            input: input.into(),
            output: output.into(),
            variant: None,
            raw: None,
        }
    }

    pub fn with_variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.raw = Some(raw);
        self
    }
}

pub fn print_conversion(conversion: &Conversion, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(conversion).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OPERATION", "INPUT", "OUTPUT", "VARIANT"])
                .add_row(vec![
                    conversion.operation.to_string(),
                    conversion.input.clone(),
                    visible(&conversion.output),
                    conversion.variant.unwrap_or("-").to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match conversion.variant {
            Some(variant) => println!(
                "{} {} -> {} ({variant})",
                conversion.operation,
                conversion.input,
                visible(&conversion.output)
            ),
            None => println!(
                "{} {} -> {}",
                conversion.operation,
                conversion.input,
                visible(&conversion.output)
            ),
        },
        OutputFormat::Raw => match &conversion.raw {
            Some(raw) => print_raw(raw),
            None => print_raw(conversion.output.as_bytes()),
        },
    }
}

#[derive(Serialize)]
struct LineOutput<'a> {
    index: usize,
    length: usize,
    line: &'a str,
}

/// Print lines read from a stream. `raw` holds the original bytes of each line.
pub fn print_lines(lines: &[String], raw: &[Vec<u8>], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for (index, line) in lines.iter().enumerate() {
                let out = LineOutput {
                    index,
                    length: line.chars().count(),
                    line,
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "LENGTH", "LINE"]);
            for (index, line) in lines.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    line.chars().count().to_string(),
                    visible(line),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, line) in lines.iter().enumerate() {
                println!("{index:>4}: {}", visible(line));
            }
        }
        OutputFormat::Raw => {
            for bytes in raw {
                print_raw(bytes);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Escape control and non-printable characters for terminal display.
fn visible(text: &str) -> String {
    text.escape_debug().to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_json_omits_empty_variant() {
        let conversion = Conversion::new("int.encode", "1", "01000000");
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["operation"], "int.encode");
        assert_eq!(json["output"], "01000000");
        assert!(json.get("variant").is_none());
        assert!(json.get("raw").is_none());

        let json = serde_json::to_value(conversion.with_variant("int")).unwrap();
        assert_eq!(json["variant"], "int");
    }

    #[test]
    fn visible_escapes_control_characters() {
        assert_eq!(visible("a\tb\n"), "a\\tb\\n");
        assert_eq!(visible("\u{20ac}"), "\u{20ac}");
    }
}
