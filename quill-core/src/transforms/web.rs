//! Web transport encodings: URL, HTML entities, quoted-printable.

use std::fmt::Write as _;

use super::utf8_string;
use crate::{CodecError, Scheme, TransformOptions};

/// Symbols replaced by `html` encode, in addition to the markup specials.
const HTML_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('©', "&copy;"),
    ('®', "&reg;"),
    ('™', "&trade;"),
    ('€', "&euro;"),
    ('£', "&pound;"),
    ('¥', "&yen;"),
    ('¢', "&cent;"),
    ('§', "&sect;"),
    ('°', "&deg;"),
    ('±', "&plusmn;"),
    ('×', "&times;"),
    ('÷', "&divide;"),
    ('•', "&bull;"),
    ('…', "&hellip;"),
    ('—', "&mdash;"),
    ('–', "&ndash;"),
    ('\u{a0}', "&nbsp;"),
    ('«', "&laquo;"),
    ('»', "&raquo;"),
];

/// Characters `url` encode leaves untouched. `+` is excluded so that it
/// survives the `+` → space rule on decode.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_.!~*'();,/?:@&=$#".contains(c)
}

pub(crate) fn url_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if c == ' ' {
            out.push('+');
        } else if is_url_safe(c) {
            out.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    Ok(out)
}

pub(crate) fn url_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let spaced = text.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CodecError::malformed(Scheme::Url, e.to_string()))
}

pub(crate) fn url_component_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(urlencoding::encode(text).into_owned())
}

pub(crate) fn url_component_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    urlencoding::decode(text)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CodecError::malformed(Scheme::UrlComponent, e.to_string()))
}

pub(crate) fn html_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match HTML_ENTITIES.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Ok(out)
}

/// Resolves named, decimal and hexadecimal entities. Shared by `html` and
/// `html-full`.
pub(crate) fn html_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(html_escape::decode_html_entities(text).into_owned())
}

pub(crate) fn html_full_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len() * 6);
    for c in text.chars() {
        let _ = write!(out, "&#{};", u32::from(c));
    }
    Ok(out)
}

pub(crate) fn quoted_printable_encode(
    text: &str,
    _: &TransformOptions,
) -> Result<String, CodecError> {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if (33..=126).contains(&byte) && byte != b'=' {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "={byte:02X}");
        }
    }
    Ok(out)
}

pub(crate) fn quoted_printable_decode(
    text: &str,
    _: &TransformOptions,
) -> Result<String, CodecError> {
    let input = text.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] != b'=' {
            bytes.push(input[i]);
            i += 1;
            continue;
        }
        match &input[i + 1..] {
            [b'\r', b'\n', ..] => i += 3,
            [b'\n', ..] => i += 2,
            [hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                bytes.push((hex_value(*hi) << 4) | hex_value(*lo));
                i += 3;
            }
            _ => {
                return Err(CodecError::malformed(
                    Scheme::QuotedPrintable,
                    format!("'=' at byte {i} is not followed by two hex digits"),
                ))
            }
        }
    }
    utf8_string(Scheme::QuotedPrintable, bytes)
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
