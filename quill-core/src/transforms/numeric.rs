//! Per-character numeric renderings and Unicode code-unit renderings.
//!
//! Encoders emit one token per character (or per byte / code unit) joined by
//! the caller's separator. Decoders never need to know that separator: they
//! tokenize on whitespace and commas.

use std::fmt::Write as _;

use super::{tokens, utf8_string};
use crate::{CodecError, Scheme, TransformOptions};

fn render(text: &str, separator: &str, token: impl Fn(u32) -> String) -> String {
    text.chars()
        .map(|c| token(u32::from(c)))
        .collect::<Vec<_>>()
        .join(separator)
}

fn strip_prefix_ignore_case<'a>(token: &'a str, prefix: &str) -> &'a str {
    match token.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &token[prefix.len()..],
        _ => token,
    }
}

/// Parses each token as a code point in `radix`, after removing `prefix`.
fn parse_code_points(
    scheme: Scheme,
    text: &str,
    radix: u32,
    prefix: &str,
) -> Result<String, CodecError> {
    tokens(text)
        .map(|token| {
            let digits = strip_prefix_ignore_case(token, prefix);
            u32::from_str_radix(digits, radix)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    CodecError::malformed(scheme, format!("'{token}' is not a valid code point"))
                })
        })
        .collect()
}

pub(crate) fn hex_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| format!("{cp:02x}")))
}

pub(crate) fn hex_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Hex, text, 16, "0x")
}

pub(crate) fn hex0x_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| format!("0x{cp:02x}")))
}

pub(crate) fn hex0x_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Hex0x, text, 16, "0x")
}

pub(crate) fn binary_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| format!("{cp:08b}")))
}

pub(crate) fn binary_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Binary, text, 2, "0b")
}

pub(crate) fn octal_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| format!("{cp:03o}")))
}

pub(crate) fn octal_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Octal, text, 8, "0o")
}

/// Shared by `decimal` and `ascii`.
pub(crate) fn decimal_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| cp.to_string()))
}

pub(crate) fn decimal_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Decimal, text, 10, "")
}

pub(crate) fn ascii_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Ascii, text, 10, "")
}

pub(crate) fn unicode_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(render(text, &opts.separator, |cp| format!("U+{cp:04X}")))
}

pub(crate) fn unicode_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    parse_code_points(Scheme::Unicode, text, 16, "U+")
}

pub(crate) fn utf8_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .bytes()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(&opts.separator))
}

pub(crate) fn utf8_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let bytes = tokens(text)
        .map(|token| {
            u8::from_str_radix(strip_prefix_ignore_case(token, "0x"), 16).map_err(|_| {
                CodecError::malformed(Scheme::Utf8, format!("'{token}' is not a hex byte"))
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    utf8_string(Scheme::Utf8, bytes)
}

pub(crate) fn utf16_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .encode_utf16()
        .map(|unit| format!("{unit:04X}"))
        .collect::<Vec<_>>()
        .join(&opts.separator))
}

pub(crate) fn utf16_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let units = tokens(text)
        .map(|token| {
            u16::from_str_radix(strip_prefix_ignore_case(token, "0x"), 16).map_err(|_| {
                CodecError::malformed(Scheme::Utf16, format!("'{token}' is not a UTF-16 code unit"))
            })
        })
        .collect::<Result<Vec<u16>, _>>()?;
    String::from_utf16(&units).map_err(|e| CodecError::malformed(Scheme::Utf16, e.to_string()))
}

/// `\uXXXX` per UTF-16 code unit, so astral characters become surrogate
/// pairs.
pub(crate) fn unicode_escape_encode(
    text: &str,
    _: &TransformOptions,
) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        let _ = write!(out, "\\u{unit:04x}");
    }
    Ok(out)
}

/// Replaces `\uXXXX` escapes and leaves any other text in place.
pub(crate) fn unicode_escape_decode(
    text: &str,
    _: &TransformOptions,
) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len());
    let mut pending: Vec<u16> = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find("\\u") {
        let (before, escape) = rest.split_at(pos);
        if !before.is_empty() {
            flush_units(&mut out, &mut pending)?;
            out.push_str(before);
        }
        let digits = escape.get(2..6).filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()));
        match digits.and_then(|d| u16::from_str_radix(d, 16).ok()) {
            Some(unit) => {
                pending.push(unit);
                rest = &escape[6..];
            }
            None => {
                flush_units(&mut out, &mut pending)?;
                out.push_str("\\u");
                rest = &escape[2..];
            }
        }
    }
    flush_units(&mut out, &mut pending)?;
    out.push_str(rest);
    Ok(out)
}

fn flush_units(out: &mut String, pending: &mut Vec<u16>) -> Result<(), CodecError> {
    if pending.is_empty() {
        return Ok(());
    }
    let decoded = String::from_utf16(pending)
        .map_err(|e| CodecError::malformed(Scheme::UnicodeEscape, e.to_string()))?;
    out.push_str(&decoded);
    pending.clear();
    Ok(())
}
