//! Classical ciphers: rotations, Caesar, Atbash, Vigenère, Bacon, XOR.
//!
//! Letter-based ciphers only touch ASCII letters and preserve case; every
//! other character passes through unchanged unless noted.

use super::utf8_string;
use crate::{CodecError, Scheme, TransformOptions};

/// Shifts an ASCII letter forward by `shift` (0..26), preserving case.
fn shift_letter(c: char, shift: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    let offset = (c as u8 - base + shift) % 26;
    char::from(base + offset)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(26) as u8
}

/// Self-inverse; used for both directions.
pub(crate) fn rot13(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text.chars().map(|c| shift_letter(c, 13)).collect())
}

/// Rotates digits by five; self-inverse.
pub(crate) fn rot5(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .chars()
        .map(|c| match c {
            '0'..='9' => char::from(b'0' + (c as u8 - b'0' + 5) % 10),
            _ => c,
        })
        .collect())
}

/// Rotates printable ASCII 33..=126 by 47; self-inverse.
pub(crate) fn rot47(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .chars()
        .map(|c| match c {
            '!'..='~' => char::from(b'!' + (c as u8 - b'!' + 47) % 94),
            _ => c,
        })
        .collect())
}

pub(crate) fn caesar_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    let shift = normalize_shift(opts.shift);
    Ok(text.chars().map(|c| shift_letter(c, shift)).collect())
}

pub(crate) fn caesar_decode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    let shift = (26 - normalize_shift(opts.shift)) % 26;
    Ok(text.chars().map(|c| shift_letter(c, shift)).collect())
}

/// Mirrors the alphabet (A<->Z); self-inverse.
pub(crate) fn atbash(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .chars()
        .map(|c| match c {
            'A'..='Z' => char::from(b'Z' - (c as u8 - b'A')),
            'a'..='z' => char::from(b'z' - (c as u8 - b'a')),
            _ => c,
        })
        .collect())
}

/// The key reduced to letter offsets. Non-letters in the key are dropped.
fn vigenere_key(key: &str) -> Vec<u8> {
    key.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect()
}

fn vigenere(text: &str, key: &str, invert: bool) -> String {
    let key = vigenere_key(key);
    if key.is_empty() {
        return text.to_owned();
    }
    let mut index = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let k = key[index % key.len()];
            index += 1;
            shift_letter(c, if invert { (26 - k) % 26 } else { k })
        })
        .collect()
}

pub(crate) fn vigenere_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(vigenere(text, &opts.key, false))
}

pub(crate) fn vigenere_decode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(vigenere(text, &opts.key, true))
}

/// Bacon code of a letter offset: five `A`/`B` symbols, most significant
/// bit first. All 26 letters get distinct codes.
fn bacon_code(offset: u8) -> String {
    (0..5)
        .rev()
        .map(|bit| if (offset >> bit) & 1 == 0 { 'A' } else { 'B' })
        .collect()
}

fn bacon_letter(code: &str) -> Option<char> {
    if code.len() != 5 {
        return None;
    }
    let mut offset: u8 = 0;
    for symbol in code.bytes() {
        offset = (offset << 1)
            | match symbol {
                b'A' => 0,
                b'B' => 1,
                _ => return None,
            };
    }
    (offset < 26).then(|| char::from(b'A' + offset))
}

/// Letters become codes, spaces become `/`, anything else is dropped.
pub(crate) fn bacon_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(|c| match c {
            'A'..='Z' => Some(bacon_code(c as u8 - b'A')),
            ' ' => Some("/".to_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" "))
}

/// Unknown tokens pass through literally.
pub(crate) fn bacon_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .split_whitespace()
        .map(|token| match token {
            "/" => " ".to_owned(),
            _ => bacon_letter(token).map_or_else(|| token.to_owned(), String::from),
        })
        .collect())
}

fn xor_bytes(data: &[u8], key: &str) -> Result<Vec<u8>, CodecError> {
    if key.is_empty() {
        return Err(CodecError::malformed(Scheme::Xor, "key must not be empty"));
    }
    Ok(data.iter().zip(key.bytes().cycle()).map(|(d, k)| d ^ k).collect())
}

pub(crate) fn xor_encode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    Ok(hex::encode(xor_bytes(text.as_bytes(), &opts.key)?))
}

pub(crate) fn xor_decode(text: &str, opts: &TransformOptions) -> Result<String, CodecError> {
    let data =
        hex::decode(text.trim()).map_err(|e| CodecError::malformed(Scheme::Xor, e.to_string()))?;
    utf8_string(Scheme::Xor, xor_bytes(&data, &opts.key)?)
}
