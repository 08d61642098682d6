//! Backslash-escaped literals and raw byte strings.
//!
//! Two escape grammars are recognized, one per decoder:
//! ```text
//! decode_escaped           \\ -> \     \xHH   -> char U+00HH
//! decode_unicode_escaped   \\ -> \     \uHHHH -> char U+HHHH
//! ```
//! Anything else after `\`, a non-hex digit, or text ending inside an escape
//! is an error. Raw strings map each byte to the `char` of the same value
//! (0-255), with no character encoding in between.

use std::borrow::Cow;
use std::str::CharIndices;

use crate::error::{CodecError, EscapeFault, Result};

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

#[derive(Debug, Clone, Copy)]
enum EscapeStyle {
    Byte,
    Unicode,
}

impl EscapeStyle {
    fn marker(self) -> char {
        match self {
            EscapeStyle::Byte => 'x',
            EscapeStyle::Unicode => 'u',
        }
    }

    fn digits(self) -> usize {
        match self {
            EscapeStyle::Byte => 2,
            EscapeStyle::Unicode => 4,
        }
    }
}

/// Decode `\\` and `\xHH` escapes.
///
/// Text without any `\` is returned borrowed, unchanged.
pub fn decode_escaped(text: &str) -> Result<Cow<'_, str>> {
    unescape(text, EscapeStyle::Byte)
}

/// Decode `\\` and `\uHHHH` escapes.
///
/// A high surrogate escape directly followed by a low surrogate escape is
/// combined into one supplementary code point. Unpaired surrogates fail.
pub fn decode_unicode_escaped(text: &str) -> Result<Cow<'_, str>> {
    unescape(text, EscapeStyle::Unicode)
}

fn unescape(text: &str, style: EscapeStyle) -> Result<Cow<'_, str>> {
    if !text.contains('\\') {
        return Ok(Cow::Borrowed(text));
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let invalid = |fault: EscapeFault| CodecError::InvalidEscape { position, fault };
        match chars.next() {
            None => return Err(invalid(EscapeFault::Truncated)),
            Some((_, '\\')) => out.push('\\'),
            Some((_, marker)) if marker == style.marker() => {
                let value = read_hex(&mut chars, style.digits()).map_err(invalid)?;
                let decoded = match style {
                    EscapeStyle::Byte => char::from_u32(value)
                        .ok_or(invalid(EscapeFault::InvalidCodePoint(value)))?,
                    EscapeStyle::Unicode => combine_surrogates(position, value, &mut chars)?,
                };
                out.push(decoded);
            }
            Some((_, other)) => return Err(invalid(EscapeFault::Unknown(other))),
        }
    }

    Ok(Cow::Owned(out))
}

fn read_hex(chars: &mut CharIndices<'_>, digits: usize) -> std::result::Result<u32, EscapeFault> {
    let mut value = 0u32;
    for _ in 0..digits {
        let (_, c) = chars.next().ok_or(EscapeFault::Truncated)?;
        let digit = c.to_digit(16).ok_or(EscapeFault::BadHexDigit(c))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

/// Resolve a `\uHHHH` value, consuming a trailing low surrogate escape when
/// `value` is a high surrogate.
///
/// `position` is the offset of the escape that produced `value`. Faults inside
/// the trailing escape are reported at that escape's own `\`.
fn combine_surrogates(position: usize, value: u32, chars: &mut CharIndices<'_>) -> Result<char> {
    let invalid =
        |position: usize, fault: EscapeFault| CodecError::InvalidEscape { position, fault };
    let unpaired = invalid(position, EscapeFault::InvalidCodePoint(value));

    if !HIGH_SURROGATES.contains(&value) {
        return char::from_u32(value).ok_or(unpaired);
    }

    let mut ahead = chars.clone();
    let low_position = match (ahead.next(), ahead.next()) {
        (Some((low_position, '\\')), Some((_, 'u'))) => low_position,
        _ => return Err(unpaired),
    };
    *chars = ahead;

    let low = read_hex(chars, 4).map_err(|fault| invalid(low_position, fault))?;
    if !LOW_SURROGATES.contains(&low) {
        return Err(unpaired);
    }
    char::from_u32(0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00)).ok_or(unpaired)
}

/// Widen every byte to the `char` with the same value.
pub fn raw_string_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Narrow every `char` to a byte.
///
/// Fails with [`CodecError::CharOutOfRange`] on the first character above 255,
/// reporting its byte offset in `text`.
pub fn bytes_from_raw_string(text: &str) -> Result<Vec<u8>> {
    text.char_indices()
        .map(|(position, c)| {
            u8::try_from(c).map_err(|_| CodecError::CharOutOfRange {
                value: u32::from(c),
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fault_of(err: CodecError) -> (usize, EscapeFault) {
        match err {
            CodecError::InvalidEscape { position, fault } => (position, fault),
            other => panic!("expected InvalidEscape, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_is_borrowed() {
        let decoded = decode_escaped("no escapes here").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("no escapes here")));
        let decoded = decode_unicode_escaped("").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("")));
    }

    #[test]
    fn double_backslash() {
        assert_eq!(decode_escaped("a\\\\b").unwrap(), "a\\b");
        assert_eq!(decode_unicode_escaped("a\\\\b").unwrap(), "a\\b");
        assert_eq!(decode_escaped("\\\\\\\\").unwrap(), "\\\\");
    }

    #[test]
    fn hex_byte_escape() {
        assert_eq!(decode_escaped("a\\x41b").unwrap(), "aAb");
        assert_eq!(decode_escaped("\\x00\\xff").unwrap(), "\u{0}\u{ff}");
        assert_eq!(decode_escaped("\\xE9t\\xe9").unwrap(), "\u{e9}t\u{e9}");
    }

    #[test]
    fn escaped_backslash_before_x_is_literal() {
        assert_eq!(decode_escaped("\\\\x41").unwrap(), "\\x41");
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(decode_unicode_escaped("euro:\\u20ac").unwrap(), "euro:\u{20ac}");
        assert_eq!(decode_unicode_escaped("\\u0041\\u00e9").unwrap(), "A\u{e9}");
    }

    #[test]
    fn non_ascii_text_passes_through() {
        assert_eq!(decode_unicode_escaped("caf\u{e9} \\u20ac").unwrap(), "caf\u{e9} \u{20ac}");
    }

    #[test]
    fn surrogate_pair_is_combined() {
        assert_eq!(
            decode_unicode_escaped("\\ud83d\\ude00!").unwrap(),
            "\u{1F600}!"
        );
    }

    #[test]
    fn lone_surrogates_fail() {
        let (_, fault) = fault_of(decode_unicode_escaped("\\ud83d").unwrap_err());
        assert_eq!(fault, EscapeFault::InvalidCodePoint(0xD83D));

        let (_, fault) = fault_of(decode_unicode_escaped("\\ude00").unwrap_err());
        assert_eq!(fault, EscapeFault::InvalidCodePoint(0xDE00));

        let (_, fault) = fault_of(decode_unicode_escaped("\\ud83d\\u0041").unwrap_err());
        assert_eq!(fault, EscapeFault::InvalidCodePoint(0xD83D));
    }

    #[test]
    fn malformed_low_surrogate_escape_reports_its_own_fault() {
        assert_eq!(
            fault_of(decode_unicode_escaped("\\ud83d\\u").unwrap_err()),
            (6, EscapeFault::Truncated)
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("\\ud83d\\uzz00").unwrap_err()),
            (6, EscapeFault::BadHexDigit('z'))
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("ok \\ud83d\\ude0").unwrap_err()),
            (9, EscapeFault::Truncated)
        );
    }

    #[test]
    fn high_surrogate_followed_by_other_escape_is_unpaired() {
        assert_eq!(
            fault_of(decode_unicode_escaped("\\ud83d\\\\").unwrap_err()),
            (0, EscapeFault::InvalidCodePoint(0xD83D))
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("x\\ud83dy").unwrap_err()),
            (1, EscapeFault::InvalidCodePoint(0xD83D))
        );
    }

    #[test]
    fn escape_positions_are_byte_offsets() {
        assert_eq!(
            fault_of(decode_escaped("\u{e9}\\q").unwrap_err()),
            (2, EscapeFault::Unknown('q'))
        );
    }

    #[test]
    fn unknown_escape_fails() {
        let err = decode_escaped("tab\\t").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
        assert_eq!(fault_of(err), (3, EscapeFault::Unknown('t')));

        let (_, fault) = fault_of(decode_escaped("\\u20ac").unwrap_err());
        assert_eq!(fault, EscapeFault::Unknown('u'));

        let (_, fault) = fault_of(decode_unicode_escaped("\\x41").unwrap_err());
        assert_eq!(fault, EscapeFault::Unknown('x'));
    }

    #[test]
    fn trailing_backslash_fails() {
        assert_eq!(
            fault_of(decode_escaped("bad\\").unwrap_err()),
            (3, EscapeFault::Truncated)
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("bad\\").unwrap_err()),
            (3, EscapeFault::Truncated)
        );
    }

    #[test]
    fn truncated_hex_fails() {
        assert_eq!(
            fault_of(decode_escaped("x\\x4").unwrap_err()),
            (1, EscapeFault::Truncated)
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("\\u20a").unwrap_err()),
            (0, EscapeFault::Truncated)
        );
    }

    #[test]
    fn bad_hex_digit_fails() {
        assert_eq!(
            fault_of(decode_escaped("\\x4g").unwrap_err()),
            (0, EscapeFault::BadHexDigit('g'))
        );
        assert_eq!(
            fault_of(decode_escaped("\\x+1").unwrap_err()),
            (0, EscapeFault::BadHexDigit('+'))
        );
        assert_eq!(
            fault_of(decode_unicode_escaped("\\u20 c").unwrap_err()),
            (0, EscapeFault::BadHexDigit(' '))
        );
    }

    #[test]
    fn raw_string_widens_bytes() {
        let text = raw_string_from_bytes(&[0x41, 0x00, 0x80, 0xFF]);
        let values: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(values, vec![0x41, 0x00, 0x80, 0xFF]);
        assert_eq!(raw_string_from_bytes(&[]), "");
    }

    #[test]
    fn raw_string_roundtrip() {
        let all: Vec<u8> = (0..=255u8).collect();
        let text = raw_string_from_bytes(&all);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(bytes_from_raw_string(&text).unwrap(), all);
    }

    #[test]
    fn raw_string_rejects_wide_chars() {
        let text: String = ['a', 'b', char::from_u32(300).unwrap()].iter().collect();
        let err = bytes_from_raw_string(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert!(matches!(
            err,
            CodecError::CharOutOfRange {
                value: 300,
                position: 2
            }
        ));
        assert!(bytes_from_raw_string("\u{20ac}").is_err());
    }

    #[test]
    fn raw_string_positions_are_byte_offsets() {
        let err = bytes_from_raw_string("\u{e9}\u{12c}").unwrap_err();
        assert!(matches!(
            err,
            CodecError::CharOutOfRange {
                value: 0x12C,
                position: 2
            }
        ));
    }

    #[test]
    fn decode_then_narrow_pipeline() {
        let text = decode_escaped("\\x80abc\\xff").unwrap();
        assert_eq!(
            bytes_from_raw_string(&text).unwrap(),
            vec![0x80, b'a', b'b', b'c', 0xFF]
        );
    }
}
