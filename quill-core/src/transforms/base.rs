//! Byte-oriented base encodings: Base64, Base64 URL, Base32, Base16, UUencode.
//!
//! All of these encode the UTF-8 bytes of the input and require the decoded
//! bytes to be valid UTF-8.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use super::utf8_string;
use crate::{CodecError, Scheme, TransformOptions};

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub(crate) fn base64_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(STANDARD.encode(text.as_bytes()))
}

pub(crate) fn base64_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| CodecError::malformed(Scheme::Base64, e.to_string()))?;
    utf8_string(Scheme::Base64, bytes)
}

pub(crate) fn base64url_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(URL_SAFE_NO_PAD.encode(text.as_bytes()))
}

/// Accepts both the URL-safe and the standard alphabet, padded or not.
pub(crate) fn base64url_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let mut standard: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    let bytes = STANDARD
        .decode(standard)
        .map_err(|e| CodecError::malformed(Scheme::Base64Url, e.to_string()))?;
    utf8_string(Scheme::Base64Url, bytes)
}

/// Packs the input into 5-bit groups, `=`-padded to a multiple of 8.
pub(crate) fn base32_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5) + 7);
    let mut buffer: u16 = 0;
    let mut bits: u8 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(base32_symbol(buffer >> bits));
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(base32_symbol(buffer << (5 - bits)));
    }
    while out.len() % 8 != 0 {
        out.push('=');
    }
    Ok(out)
}

fn base32_symbol(group: u16) -> char {
    char::from(BASE32_ALPHABET[usize::from(group & 0x1f)])
}

/// Unpacks 5-bit groups, dropping any trailing partial byte.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn base32_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let cleaned = text.trim().trim_end_matches('=');
    let mut bytes = Vec::with_capacity(cleaned.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u8 = 0;

    for c in cleaned.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        let upper = c.to_ascii_uppercase();
        let value = BASE32_ALPHABET
            .iter()
            .position(|&symbol| char::from(symbol) == upper)
            .ok_or_else(|| {
                CodecError::malformed(Scheme::Base32, format!("invalid character '{c}'"))
            })?;
        buffer = (buffer << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    utf8_string(Scheme::Base32, bytes)
}

pub(crate) fn base16_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex::encode_upper(text.as_bytes()))
}

pub(crate) fn base16_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let bytes =
        hex::decode(text.trim()).map_err(|e| CodecError::malformed(Scheme::Base16, e.to_string()))?;
    utf8_string(Scheme::Base16, bytes)
}

/// Maps a six-bit value to its UUencode character; zero is a backtick.
fn uu_symbol(value: u8) -> char {
    match value & 0x3f {
        0 => '`',
        v => char::from(32 + v),
    }
}

/// Each 3-byte group becomes 4 characters; a trailing group of `n` bytes
/// becomes `n + 1` characters.
///
/// This is the bare character mapping, not a `uuencode` file body: there is
/// no length prefix or line framing, the final group is not padded to four
/// characters, and a zero sextet is always a backtick, never a space.
pub(crate) fn uuencode_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let sextets = [b0 >> 2, (b0 << 4) | (b1 >> 4), (b1 << 2) | (b2 >> 6), b2];
        out.extend(sextets.iter().take(chunk.len() + 1).map(|&s| uu_symbol(s)));
    }
    Ok(out)
}

pub(crate) fn uuencode_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let mut values = Vec::with_capacity(text.len());
    for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
        match u8::try_from(c) {
            Ok(b @ 32..=96) => values.push((b - 32) & 0x3f),
            _ => {
                return Err(CodecError::malformed(
                    Scheme::Uuencode,
                    format!("invalid character '{c}'"),
                ))
            }
        }
    }

    let mut bytes = Vec::with_capacity(values.len() * 3 / 4);
    for group in values.chunks(4) {
        if group.len() < 2 {
            return Err(CodecError::malformed(Scheme::Uuencode, "truncated final group"));
        }
        let v1 = group[1];
        let v2 = group.get(2).copied().unwrap_or(0);
        let v3 = group.get(3).copied().unwrap_or(0);
        let decoded = [(group[0] << 2) | (v1 >> 4), (v1 << 4) | (v2 >> 2), (v2 << 6) | v3];
        bytes.extend_from_slice(&decoded[..group.len() - 1]);
    }
    utf8_string(Scheme::Uuencode, bytes)
}
