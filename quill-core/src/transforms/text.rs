//! Spelling alphabets and simple text rewrites: A1Z26, NATO, Morse, reverse.

use crate::{CodecError, TransformOptions};

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', "/"),
];

const NATO_TABLE: &[(char, &str)] = &[
    ('A', "Alpha"),
    ('B', "Bravo"),
    ('C', "Charlie"),
    ('D', "Delta"),
    ('E', "Echo"),
    ('F', "Foxtrot"),
    ('G', "Golf"),
    ('H', "Hotel"),
    ('I', "India"),
    ('J', "Juliet"),
    ('K', "Kilo"),
    ('L', "Lima"),
    ('M', "Mike"),
    ('N', "November"),
    ('O', "Oscar"),
    ('P', "Papa"),
    ('Q', "Quebec"),
    ('R', "Romeo"),
    ('S', "Sierra"),
    ('T', "Tango"),
    ('U', "Uniform"),
    ('V', "Victor"),
    ('W', "Whiskey"),
    ('X', "X-ray"),
    ('Y', "Yankee"),
    ('Z', "Zulu"),
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Three"),
    ('4', "Four"),
    ('5', "Five"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Eight"),
    ('9', "Niner"),
    (' ', "[space]"),
];

/// Upper-cases `text` and replaces each character by its table entry,
/// passing unknown characters through, joined by `joiner`.
fn substitute(text: &str, table: &[(char, &str)], joiner: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(|c| {
            table
                .iter()
                .find(|(symbol, _)| *symbol == c)
                .map_or_else(|| c.to_string(), |(_, word)| (*word).to_owned())
        })
        .collect::<Vec<_>>()
        .join(joiner)
}

pub(crate) fn a1z26_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| match c {
            'A'..='Z' => (u32::from(c) - u32::from('A') + 1).to_string(),
            ' ' => "0".to_owned(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-"))
}

pub(crate) fn a1z26_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .split('-')
        .map(|token| match token.trim().parse::<u32>() {
            Ok(0) => " ".to_owned(),
            Ok(n @ 1..=26) => char::from_u32(u32::from('A') + n - 1)
                .map_or_else(|| token.to_owned(), String::from),
            _ => token.to_owned(),
        })
        .collect())
}

pub(crate) fn nato_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(substitute(text, NATO_TABLE, " "))
}

pub(crate) fn nato_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .split_whitespace()
        .map(|word| {
            NATO_TABLE
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(word))
                .map_or_else(|| word.to_owned(), |(symbol, _)| symbol.to_string())
        })
        .collect())
}

pub(crate) fn morse_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(substitute(text, MORSE_TABLE, " "))
}

pub(crate) fn morse_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text
        .split_whitespace()
        .map(|code| match code {
            "/" | "|" => " ".to_owned(),
            _ => MORSE_TABLE
                .iter()
                .find(|(_, pattern)| *pattern == code)
                .map_or_else(|| code.to_owned(), |(symbol, _)| symbol.to_string()),
        })
        .collect())
}

/// Self-inverse; used for both directions.
pub(crate) fn reverse(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    Ok(text.chars().rev().collect())
}
